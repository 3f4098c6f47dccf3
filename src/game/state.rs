use super::board::{self, Board};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// Turn controller: the live board plus whose turn it is and how the game
/// ended. Once an outcome is recorded, no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Playable columns, or none at all once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. The mover is checked for four in a row, then
    /// the board for a draw.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())?;

        if self.board.has_four_in_a_row(self.current_player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.legal_moves().is_empty() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }

    /// Discard the current game and start a fresh one.
    pub fn restart(&mut self) {
        *self = GameState::initial();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), COLS);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // original untouched
        assert_eq!(state.board().piece_count(), 0);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move_mut(9), Err(MoveError::InvalidColumn));
        assert_eq!(state.current_player(), Player::Red);

        for _ in 0..6 {
            state.apply_move_mut(0).unwrap();
        }
        let before = state;
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        assert_eq!(state, before);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_input_frozen_after_game_end() {
        let mut state = GameState::initial();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.apply_move_mut(col).unwrap();
        }
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move_mut(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Columns are filled in pairs with the bottom three rows and top
        // three rows swapped, so no line of four ever forms.
        let pattern = [
            0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 0, 6, 0, 6, 0, 1, 2, 1,
            2, 1, 2, 3, 4, 3, 4, 3, 4, 5, 6, 5, 6, 5, 6,
        ];

        for &col in &pattern {
            state.apply_move_mut(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.board().is_full());
    }

    #[test]
    fn test_restart() {
        let mut state = GameState::initial();
        state.apply_move_mut(3).unwrap();
        state.restart();
        assert_eq!(state, GameState::initial());
    }
}
