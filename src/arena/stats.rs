use serde::Serialize;

use crate::game::Player;

use super::episode::GameRecord;

/// Aggregated results between two contestants, `home` and `away`, across
/// games in which they may swap colors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchStats {
    pub games: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    pub draws: usize,
    pub red_wins: usize,
    pub yellow_wins: usize,
    total_moves: usize,
    total_think_micros: u64,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game in which `home` played `home_color`.
    pub fn record(&mut self, record: &GameRecord, home_color: Player) {
        self.games += 1;
        self.total_moves += record.game_length();
        self.total_think_micros += record.think_micros.iter().sum::<u64>();

        match record.winner {
            None => self.draws += 1,
            Some(winner) => {
                if winner == home_color {
                    self.home_wins += 1;
                } else {
                    self.away_wins += 1;
                }
                match winner {
                    Player::Red => self.red_wins += 1,
                    Player::Yellow => self.yellow_wins += 1,
                }
            }
        }
    }

    /// Fraction of games won by the home contestant.
    pub fn home_win_rate(&self) -> f32 {
        self.rate(self.home_wins)
    }

    /// Fraction of games won by the away contestant.
    pub fn away_win_rate(&self) -> f32 {
        self.rate(self.away_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    /// Mean time per move, in microseconds.
    pub fn average_think_micros(&self) -> f64 {
        if self.total_moves == 0 {
            return 0.0;
        }
        self.total_think_micros as f64 / self.total_moves as f64
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winner: Option<Player>, length: usize) -> GameRecord {
        GameRecord {
            winner,
            moves: vec![3; length],
            think_micros: vec![10; length],
        }
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = MatchStats::new();
        assert_eq!(stats.home_win_rate(), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
        assert_eq!(stats.average_think_micros(), 0.0);
    }

    #[test]
    fn record_attributes_wins_to_contestants() {
        let mut stats = MatchStats::new();
        stats.record(&record(Some(Player::Red), 7), Player::Red);
        stats.record(&record(Some(Player::Red), 9), Player::Yellow);
        stats.record(&record(Some(Player::Yellow), 10), Player::Yellow);
        stats.record(&record(None, 42), Player::Red);

        assert_eq!(stats.games, 4);
        assert_eq!(stats.home_wins, 2);
        assert_eq!(stats.away_wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.red_wins, 2);
        assert_eq!(stats.yellow_wins, 1);
        assert!((stats.home_win_rate() - 0.5).abs() < 1e-6);
        assert!((stats.away_win_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 17.0).abs() < 1e-6);
        assert!((stats.average_think_micros() - 10.0).abs() < 1e-9);
    }
}
