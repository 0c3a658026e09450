use crate::types::{Color, Move};

/// Errors raised by the rules engine.
///
/// Clicking an empty square or proposing an illegal destination through
/// `GameState::attempt_move` are not errors; those calls are no-ops.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("square ({file}, {rank}) is off the board")]
    OutOfBoundsSquare { file: u8, rank: u8 },

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),
}
