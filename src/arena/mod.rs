//! Head-to-head matches between agents: single games, aggregated results,
//! and configured series.

mod episode;
mod stats;

pub use episode::{play_game, GameRecord};
pub use stats::MatchStats;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::{Difficulty, SearchConfig};
use crate::error::MatchError;
use crate::game::Player;

/// Configuration of a series between two presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Home contestant, Red in the first game.
    pub red: Difficulty,
    /// Away contestant, Yellow in the first game.
    pub yellow: Difficulty,
    /// Swap colors every other game.
    pub swap_seats: bool,
    /// Base seed for random choices. Unset means a fresh seed per game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            red: Difficulty::Standard,
            yellow: Difficulty::Elite,
            swap_seats: true,
            seed: None,
        }
    }
}

/// Outcome of a whole series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub home: Difficulty,
    pub away: Difficulty,
    pub stats: MatchStats,
}

/// Play `arena.games` games between the two configured presets.
pub fn run_series(
    arena: &ArenaConfig,
    search: &SearchConfig,
) -> Result<SeriesSummary, MatchError> {
    let mut stats = MatchStats::new();

    for game in 0..arena.games {
        let home_seed = arena.seed.map(|s| s.wrapping_add(2 * game as u64));
        let away_seed = home_seed.map(|s| s.wrapping_add(1));
        let mut home = arena.red.build_agent(search, home_seed);
        let mut away = arena.yellow.build_agent(search, away_seed);

        let home_color = if arena.swap_seats && game % 2 == 1 {
            Player::Yellow
        } else {
            Player::Red
        };
        let record = match home_color {
            Player::Red => play_game(home.as_mut(), away.as_mut())?,
            Player::Yellow => play_game(away.as_mut(), home.as_mut())?,
        };

        info!(
            game = game + 1,
            of = arena.games,
            home = arena.red.label(),
            home_color = home_color.name(),
            winner = record.winner.map_or("draw", Player::name),
            moves = record.game_length(),
            "game finished"
        );
        stats.record(&record, home_color);
    }

    Ok(SeriesSummary {
        home: arena.red,
        away: arena.yellow,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ArenaConfig::default();
        assert_eq!(config.games, 10);
        assert!(config.swap_seats);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn series_counts_every_game() {
        let arena = ArenaConfig {
            games: 4,
            red: Difficulty::Beginner,
            yellow: Difficulty::Standard,
            swap_seats: true,
            seed: Some(3),
        };
        let summary = run_series(&arena, &SearchConfig::default()).unwrap();
        let stats = &summary.stats;
        assert_eq!(stats.games, 4);
        assert_eq!(stats.home_wins + stats.away_wins + stats.draws, 4);
        assert_eq!(stats.red_wins + stats.yellow_wins + stats.draws, 4);
        assert_eq!(summary.home, Difficulty::Beginner);
    }

    #[test]
    fn seeded_series_is_reproducible() {
        let arena = ArenaConfig {
            games: 3,
            red: Difficulty::Beginner,
            yellow: Difficulty::Beginner,
            swap_seats: false,
            seed: Some(21),
        };
        let search = SearchConfig::default();
        let a = run_series(&arena, &search).unwrap().stats;
        let b = run_series(&arena, &search).unwrap().stats;
        assert_eq!(
            (a.red_wins, a.yellow_wins, a.draws),
            (b.red_wins, b.yellow_wins, b.draws)
        );
        assert!((a.average_game_length() - b.average_game_length()).abs() < 1e-6);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = SeriesSummary {
            home: Difficulty::Elite,
            away: Difficulty::Beginner,
            stats: MatchStats::new(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["home"], "elite");
        assert_eq!(json["stats"]["games"], 0);
    }
}
