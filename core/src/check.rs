use crate::board::Board;
use crate::move_gen::attacks;
use crate::types::{Color, Square};

/// Returns true if any piece of `attacker` attacks `square`.
pub fn is_attacked_by(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces(attacker)
        .any(|(from, _)| attacks(board, from).contains(square))
}

/// Returns true if the king of `color` is attacked.
///
/// Purely informational: move generation does not consult it, so a side may
/// still play a move that leaves its own king attacked. A board without a
/// king of `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_attacked_by(board, king, color.opponent()))
}
