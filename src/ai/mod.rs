mod agent;
mod difficulty;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use heuristic::{
    CenterColumnHeuristic, Heuristic, HeuristicKind, WindowHeuristic, CENTER_COL, CENTER_WEIGHT,
};
pub use minimax::{
    minimax, Minimax, MinimaxAgent, SearchConfig, SearchResult, SearchStats, INFINITY,
    NEG_INFINITY, WIN_SCORE,
};
pub use random::RandomAgent;
