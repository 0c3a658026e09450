//! Game state and turn control.
//!
//! `GameState` owns the board and is the only thing that mutates it. The
//! presentation layer drives it through `select`, `attempt_move` and `reset`,
//! the AI through `apply_move`, and reads it back through the query methods.
use crate::board::Board;
use crate::check;
use crate::error::EngineError;
use crate::move_gen::{all_moves, legal_moves};
use crate::types::*;

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece as it stood on the source square (a pawn, if it promoted).
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Complete state of a game in progress.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// The human's currently selected piece
    selected: Option<Square>,
}

impl GameState {
    /// Creates a new game in the starting position with White to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial_position(), Color::White)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            selected: None,
        }
    }

    /// Puts the pieces back, hands the move to White and drops the selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Returns true if the given side's king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        check::is_in_check(&self.board, color)
    }

    /// Returns the square of the side to move's king when that king is in check.
    pub fn checked_king(&self) -> Option<Square> {
        if self.is_in_check(self.side_to_move) {
            self.board.king_square(self.side_to_move)
        } else {
            None
        }
    }

    /// Destinations available to the selected piece, for highlighting.
    pub fn selected_moves(&self) -> SquareSet {
        self.selected
            .map_or(SquareSet::EMPTY, |from| legal_moves(&self.board, from))
    }

    /// Every move the side to move can play.
    pub fn candidate_moves(&self) -> Vec<Move> {
        all_moves(&self.board, self.side_to_move)
    }

    /// Selects the piece on `square` if it belongs to the side to move,
    /// otherwise clears the selection.
    pub fn select(&mut self, square: Square) {
        self.selected = self
            .board
            .is_color(square, self.side_to_move)
            .then_some(square);
    }

    /// Tries to move the selected piece to `to`.
    ///
    /// Returns None and leaves the board untouched when nothing is selected or
    /// `to` is not a legal destination; the selection is kept in that case.
    pub fn attempt_move(&mut self, to: Square) -> Option<MoveRecord> {
        let from = self.selected?;
        let piece = self.board.piece_at(from)?;
        if !legal_moves(&self.board, from).contains(to) {
            return None;
        }
        Some(self.play(Move::new(from, to), piece))
    }

    /// Applies a fully specified move for the side to move.
    ///
    /// Nothing changes if the move is illegal.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        match self.board.piece_at(mv.from) {
            Some(piece)
                if piece.color == self.side_to_move
                    && legal_moves(&self.board, mv.from).contains(mv.to) =>
            {
                Ok(self.play(mv, piece))
            }
            _ => Err(EngineError::IllegalMove(mv)),
        }
    }

    /// Moves the piece, promotes a pawn that reached the far rank, clears the
    /// selection and passes the turn. The caller has checked legality.
    fn play(&mut self, mv: Move, piece: Piece) -> MoveRecord {
        let captured = self.board.move_piece(mv.from, mv.to);

        let promoted = piece.piece_type == PieceType::Pawn
            && mv.to.rank() == piece.color.promotion_rank();
        if promoted {
            self.board
                .set_piece(mv.to, Some(Piece::new(PieceType::Queen, piece.color)));
        }

        self.selected = None;
        self.side_to_move = self.side_to_move.opponent();

        MoveRecord {
            mv,
            piece,
            captured,
            promoted,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    fn state_with(pieces: &[(u8, u8, PieceType, Color)], side_to_move: Color) -> GameState {
        let mut board = Board::empty();
        for &(file, rank, piece_type, color) in pieces {
            board.set_piece(sq(file, rank), Some(Piece::new(piece_type, color)));
        }
        GameState::from_board(board, side_to_move)
    }

    #[test]
    fn test_starting_state() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.selected_square(), None);
        assert_eq!(state.board(), &Board::initial_position());
        assert_eq!(state.checked_king(), None);
    }

    #[test]
    fn test_select_own_piece_only() {
        let mut state = GameState::new();

        state.select(sq(4, 1));
        assert_eq!(state.selected_square(), Some(sq(4, 1)));
        assert_eq!(state.selected_moves().iter().collect::<Vec<_>>(), vec![sq(4, 2)]);

        state.select(sq(4, 6));
        assert_eq!(state.selected_square(), None);

        state.select(sq(1, 0));
        state.select(sq(4, 4));
        assert_eq!(state.selected_square(), None);
        assert!(state.selected_moves().is_empty());
    }

    #[test]
    fn test_attempt_move_applies_and_passes_turn() {
        let mut state = GameState::new();
        state.select(sq(6, 0));

        let record = state.attempt_move(sq(5, 2)).unwrap();
        assert_eq!(record.mv, Move::new(sq(6, 0), sq(5, 2)));
        assert_eq!(record.piece, Piece::new(PieceType::Knight, Color::White));
        assert_eq!(record.captured, None);
        assert!(!record.promoted);

        assert!(state.board().is_empty(sq(6, 0)));
        assert_eq!(
            state.piece_at(sq(5, 2)),
            Some(Piece::new(PieceType::Knight, Color::White))
        );
        assert_eq!(state.board().population(), 32);
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.selected_square(), None);
    }

    #[test]
    fn test_attempt_move_without_selection_is_noop() {
        let mut state = GameState::new();
        assert_eq!(state.attempt_move(sq(4, 2)), None);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_illegal_attempt_leaves_board_identical() {
        let mut state = GameState::new();
        state.select(sq(4, 1));
        let before = state.board().clone();

        for to in [sq(4, 3), sq(4, 1), sq(3, 1), sq(5, 2), sq(4, 7)] {
            assert_eq!(state.attempt_move(to), None);
            assert_eq!(state.board(), &before);
        }
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.selected_square(), Some(sq(4, 1)));
    }

    #[test]
    fn test_capture_removes_one_piece() {
        let mut state = state_with(
            &[
                (4, 0, PieceType::King, Color::White),
                (4, 7, PieceType::King, Color::Black),
                (0, 0, PieceType::Rook, Color::White),
                (0, 5, PieceType::Bishop, Color::Black),
            ],
            Color::White,
        );
        state.select(sq(0, 0));

        let record = state.attempt_move(sq(0, 5)).unwrap();
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceType::Bishop, Color::Black))
        );
        assert_eq!(state.board().population(), 3);
        assert_eq!(
            state.piece_at(sq(0, 5)),
            Some(Piece::new(PieceType::Rook, Color::White))
        );
    }

    #[test]
    fn test_white_pawn_promotes_to_queen() {
        let mut state = state_with(
            &[
                (4, 0, PieceType::King, Color::White),
                (4, 7, PieceType::King, Color::Black),
                (0, 6, PieceType::Pawn, Color::White),
            ],
            Color::White,
        );
        state.select(sq(0, 6));

        let record = state.attempt_move(sq(0, 7)).unwrap();
        assert!(record.promoted);
        assert_eq!(record.piece, Piece::new(PieceType::Pawn, Color::White));
        assert_eq!(
            state.piece_at(sq(0, 7)),
            Some(Piece::new(PieceType::Queen, Color::White))
        );
    }

    #[test]
    fn test_black_pawn_promotes_on_capture() {
        let mut state = state_with(
            &[
                (4, 0, PieceType::King, Color::White),
                (4, 7, PieceType::King, Color::Black),
                (6, 1, PieceType::Pawn, Color::Black),
                (7, 0, PieceType::Rook, Color::White),
            ],
            Color::Black,
        );

        let record = state.apply_move(Move::new(sq(6, 1), sq(7, 0))).unwrap();
        assert!(record.promoted);
        assert_eq!(record.captured, Some(Piece::new(PieceType::Rook, Color::White)));
        assert_eq!(
            state.piece_at(sq(7, 0)),
            Some(Piece::new(PieceType::Queen, Color::Black))
        );
        assert_eq!(state.side_to_move(), Color::White);
    }

    #[test]
    fn test_move_exposing_own_king_is_accepted() {
        // The white bishop shields its king from the rook; moving it away is allowed.
        let mut state = state_with(
            &[
                (4, 0, PieceType::King, Color::White),
                (4, 2, PieceType::Bishop, Color::White),
                (4, 7, PieceType::Rook, Color::Black),
                (0, 7, PieceType::King, Color::Black),
            ],
            Color::White,
        );
        assert!(!state.is_in_check(Color::White));

        state.select(sq(4, 2));
        assert!(state.attempt_move(sq(5, 3)).is_some());
        assert!(state.is_in_check(Color::White));
        assert_eq!(state.checked_king(), None);

        // Black to move now; once Black passes the turn back White's king shows as checked.
        state.apply_move(Move::new(sq(0, 7), sq(0, 6))).unwrap();
        assert_eq!(state.checked_king(), Some(sq(4, 0)));
    }

    #[test]
    fn test_apply_move_rejects_illegal_moves() {
        let mut state = GameState::new();
        let before = state.clone();

        let black_piece = Move::new(sq(4, 6), sq(4, 5));
        assert_eq!(
            state.apply_move(black_piece),
            Err(EngineError::IllegalMove(black_piece))
        );
        assert!(state.apply_move(Move::new(sq(4, 1), sq(4, 3))).is_err());
        assert!(state.apply_move(Move::new(sq(4, 4), sq(4, 5))).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_candidate_moves_follow_side_to_move() {
        let mut state = GameState::new();
        assert!(state
            .candidate_moves()
            .iter()
            .all(|mv| state.board().is_color(mv.from, Color::White)));

        state.apply_move(Move::new(sq(4, 1), sq(4, 2))).unwrap();
        assert!(state
            .candidate_moves()
            .iter()
            .all(|mv| state.board().is_color(mv.from, Color::Black)));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new();
        state.apply_move(Move::new(sq(4, 1), sq(4, 2))).unwrap();
        state.select(sq(4, 6));
        state.reset();

        assert_eq!(state, GameState::new());
    }
}
