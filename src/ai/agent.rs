use crate::game::GameState;

/// Anything that can choose a cell for the player to move.
pub trait Agent {
    /// Select an empty `(row, col)` for `state.current_player()`.
    /// Returns `None` only when the board is full.
    fn select_move(&mut self, state: &GameState) -> Option<(usize, usize)>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
