//! Core Connect Four game logic: the board with its drop, win and move
//! queries, player types, and the turn controller.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
