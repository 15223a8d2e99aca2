use crate::error::EngineError;
use crate::game::GameState;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select a column given the current game state.
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
