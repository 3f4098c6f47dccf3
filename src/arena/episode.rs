use std::time::Instant;

use serde::Serialize;
use tracing::trace;

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameOutcome, GameState, Player};

/// Result of playing a single game between two agents.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub winner: Option<Player>,
    /// Columns in the order they were played, Red first.
    pub moves: Vec<usize>,
    /// Time each agent spent choosing the matching move.
    pub think_micros: Vec<u64>,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game from the initial position until it ends. Red moves first.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::initial();
    let mut moves = Vec::new();
    let mut think_micros = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let start = Instant::now();
        let column = agent
            .select_action(&state)
            .ok_or(MatchError::NoMove(player))?;
        let elapsed = start.elapsed().as_micros() as u64;

        state
            .apply_move_mut(column)
            .map_err(|_| MatchError::IllegalMove {
                player,
                column,
                legal: state.legal_actions(),
            })?;
        trace!(
            player = player.name(),
            agent = agent.name(),
            column,
            elapsed_us = elapsed,
            "move"
        );

        moves.push(column);
        think_micros.push(elapsed);
    }

    let winner = match state.outcome().ok_or(MatchError::MissingOutcome)? {
        GameOutcome::Winner(p) => Some(p),
        GameOutcome::Draw => None,
    };

    Ok(GameRecord {
        winner,
        moves,
        think_micros,
    })
}
