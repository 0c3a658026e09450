use crate::board::Board;
use crate::types::{Color, Move, PieceType, Square, SquareSet};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const STRAIGHT_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the squares the piece on `from` may move to.
///
/// An empty square yields an empty set. Destinations holding a piece of the
/// mover's color are excluded, and so is the opposing king: it can be
/// attacked but never captured. Moves that leave the mover's own king in
/// check are *not* filtered out.
pub fn legal_moves(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color;

    let mut moves: SquareSet = attacks(board, from)
        .iter()
        .filter(|&to| match board.piece_at(to) {
            None => piece.piece_type != PieceType::Pawn,
            Some(target) => target.color != color && target.piece_type != PieceType::King,
        })
        .collect();

    if piece.piece_type == PieceType::Pawn {
        // Single push only; no double step from the home rank.
        if let Some(to) = from.offset(0, color.pawn_direction()) {
            if board.is_empty(to) {
                moves.insert(to);
            }
        }
    }

    moves
}

/// Returns the raw attack pattern of the piece on `from`.
///
/// Sliding rays run up to and including the first occupied square, jumps and
/// steps are included whatever occupies them, and a pawn attacks its two
/// forward diagonals whether or not anything stands there.
pub fn attacks(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };

    match piece.piece_type {
        PieceType::Pawn => {
            let dr = piece.color.pawn_direction();
            [-1, 1]
                .into_iter()
                .filter_map(|df| from.offset(df, dr))
                .collect()
        }
        PieceType::Knight => step_attacks(from, &KNIGHT_DELTAS),
        PieceType::King => step_attacks(from, &KING_DELTAS),
        PieceType::Bishop => sliding_attacks(board, from, &DIAGONAL_DIRS),
        PieceType::Rook => sliding_attacks(board, from, &STRAIGHT_DIRS),
        PieceType::Queen => sliding_attacks(board, from, &DIAGONAL_DIRS)
            .union(sliding_attacks(board, from, &STRAIGHT_DIRS)),
    }
}

/// Collects every move available to `color`, in square-index order of the
/// moving piece.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| legal_moves(board, from).iter().map(move |to| Move::new(from, to)))
        .collect()
}

fn step_attacks(from: Square, deltas: &[(i8, i8)]) -> SquareSet {
    deltas
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .collect()
}

fn sliding_attacks(board: &Board, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;

    for &(df, dr) in directions {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            attacked.insert(next);
            if !board.is_empty(next) {
                break; // Can't see past any piece
            }
            current = next;
        }
    }

    attacked
}
