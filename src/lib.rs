//! # Connect Four Minimax
//!
//! A Connect Four engine: a gravity-drop board with four-in-a-row detection,
//! and an automated opponent driven by depth-limited minimax with alpha-beta
//! pruning over a positional heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, legal moves, turn controller
//! - [`ai`] — Agent trait, heuristics, minimax search, difficulty presets
//! - [`arena`] — Games between agents and aggregated results
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
