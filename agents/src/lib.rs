pub mod random;

use skak_core::{EngineError, GameState, Move, MoveRecord};

/// Core trait for computer players
pub trait Agent {
    /// Picks a move for the side to move, or None if it has no move.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

/// Plays the agent's move for the side to move.
///
/// A side with no move at all is a broken game, not a pass: this returns
/// `EngineError::NoLegalMoves` and leaves the state untouched.
pub fn play_ai_move(
    state: &mut GameState,
    agent: &mut dyn Agent,
) -> Result<MoveRecord, EngineError> {
    let mv = agent
        .select_move(state)
        .ok_or(EngineError::NoLegalMoves(state.side_to_move()))?;
    state.apply_move(mv)
}

pub use random::RandomAgent;
