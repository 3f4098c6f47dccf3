use crate::game::GameState;

/// Universal interface for all move-choosing agents.
pub trait Agent {
    /// Select a column for the side to move, or `None` when no column is
    /// playable (the game is over or the board is full).
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
