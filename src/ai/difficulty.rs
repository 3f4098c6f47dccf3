use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::minimax::{MinimaxAgent, SearchConfig};
use super::random::RandomAgent;

/// Opponent strength presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal columns.
    Beginner,
    /// Minimax at `search.standard_depth` (3 by default).
    Standard,
    /// Minimax at `search.elite_depth` (5 by default).
    Elite,
}

impl Difficulty {
    /// Search depth of this preset, or `None` for the random bot.
    pub fn depth(self, search: &SearchConfig) -> Option<usize> {
        match self {
            Difficulty::Beginner => None,
            Difficulty::Standard => Some(search.standard_depth),
            Difficulty::Elite => Some(search.elite_depth),
        }
    }

    /// Build the agent for this preset. `seed` makes random choices
    /// reproducible.
    pub fn build_agent(self, search: &SearchConfig, seed: Option<u64>) -> Box<dyn Agent> {
        match self.depth(search) {
            None => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            Some(depth) => {
                let agent = MinimaxAgent::with_heuristic(depth, search.heuristic.build());
                match (search.random_preseed, seed) {
                    (true, Some(seed)) => Box::new(agent.with_random_preseed(seed)),
                    (true, None) => Box::new(agent.with_random_preseed(rand::random())),
                    (false, _) => Box::new(agent),
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Standard => "standard",
            Difficulty::Elite => "elite",
        }
    }
}
