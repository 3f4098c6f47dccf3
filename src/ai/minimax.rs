use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{CenterColumnHeuristic, Heuristic, HeuristicKind};

/// Score of a position where the maximizing side has four in a row.
/// Independent of depth: a slow win scores the same as a fast one.
pub const WIN_SCORE: i32 = 100_000;

pub const NEG_INFINITY: i32 = i32::MIN;
pub const INFINITY: i32 = i32::MAX;

/// Best column (none at a leaf) and its score from the maximizer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Search tuning shared by every minimax seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth of the `standard` preset.
    pub standard_depth: usize,
    /// Depth of the `elite` preset.
    pub elite_depth: usize,
    pub heuristic: HeuristicKind,
    /// Pre-seed each node's best column with a random legal column instead
    /// of the first one. Does not change the chosen move.
    pub random_preseed: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            standard_depth: 3,
            elite_depth: 5,
            heuristic: HeuristicKind::Center,
            random_preseed: false,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning for one maximizing side.
///
/// Children are visited in ascending column order and the best column is
/// only replaced on a strict improvement, so ties go to the lowest column.
pub struct Minimax<'a> {
    maximizer: Player,
    heuristic: &'a dyn Heuristic,
    rng: Option<&'a mut StdRng>,
    stats: SearchStats,
}

impl<'a> Minimax<'a> {
    pub fn new(maximizer: Player, heuristic: &'a dyn Heuristic) -> Self {
        Minimax {
            maximizer,
            heuristic,
            rng: None,
            stats: SearchStats::default(),
        }
    }

    /// Pre-seed the best column at each internal node from `rng`.
    pub fn with_rng(mut self, rng: &'a mut StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Full-window search from the maximizer's turn.
    pub fn search(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.minimax(board, depth, NEG_INFINITY, INFINITY, true)
    }

    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let legal = board.legal_moves();
        let own = self.maximizer.to_cell();
        let opp = self.maximizer.other().to_cell();
        let own_won = board.has_four_in_a_row(own);
        let opp_won = board.has_four_in_a_row(opp);

        if depth == 0 || own_won || opp_won || legal.is_empty() {
            let score = if own_won {
                WIN_SCORE
            } else if opp_won {
                -WIN_SCORE
            } else {
                self.heuristic.evaluate(board, self.maximizer)
            };
            return SearchResult {
                column: None,
                score,
            };
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.other()
        };
        let mut best_col = self.preseed(&legal);
        let mut value = if maximizing { NEG_INFINITY } else { INFINITY };

        for &col in &legal {
            let Some(child) = board.with_drop(col, mover.to_cell()) else {
                continue;
            };
            let score = self
                .minimax(&child, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > value {
                    value = score;
                    best_col = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_col = col;
                }
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            column: Some(best_col),
            score: value,
        }
    }

    fn preseed(&mut self, legal: &[usize]) -> usize {
        match self.rng.as_deref_mut() {
            Some(rng) => legal[rng.random_range(0..legal.len())],
            None => legal[0],
        }
    }
}

/// Reference entry point: Yellow maximizes, center-column evaluation, no
/// random pre-seed.
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult {
    Minimax::new(Player::Yellow, &CenterColumnHeuristic)
        .minimax(board, depth, alpha, beta, maximizing)
}

/// Agent that runs a fixed-depth [`Minimax`] for whichever side is to move.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: Option<StdRng>,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(CenterColumnHeuristic),
            rng: None,
            last_stats: SearchStats::default(),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            heuristic,
            ..Self::new(depth)
        }
    }

    /// Enable the random pre-seed, drawn from a seeded generator.
    pub fn with_random_preseed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Search `board` with `player` as the maximizing side.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let mut search = Minimax::new(player, self.heuristic.as_ref());
        if let Some(rng) = self.rng.as_mut() {
            search = search.with_rng(rng);
        }
        let result = search.search(board, self.depth);
        self.last_stats = search.stats();
        result
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.legal_actions().is_empty() {
            return None;
        }

        let player = state.current_player();
        let start = Instant::now();
        let result = self.search(state.board(), player);
        debug!(
            player = player.name(),
            depth = self.depth,
            heuristic = self.heuristic.name(),
            column = ?result.column,
            score = result.score,
            nodes = self.last_stats.nodes,
            cutoffs = self.last_stats.cutoffs,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search finished"
        );
        result.column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
