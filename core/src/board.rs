//! Array-based board: one optional piece per square.
use crate::types::*;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 64 squares, indexed by Square::index()
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position.
    pub fn initial_position() -> Self {
        let mut board = Self::empty();

        for color in [Color::White, Color::Black] {
            for (file_idx, &piece_type) in BACK_RANK.iter().enumerate() {
                let Some(file) = File::new(file_idx as u8) else {
                    continue;
                };
                board.set_piece(
                    Square::new(file, color.back_rank()),
                    Some(Piece::new(piece_type, color)),
                );
                board.set_piece(
                    Square::new(file, color.pawn_rank()),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }

        board
    }

    /// Gets the piece at the given square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Sets the piece at the given square.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index() as usize] = piece;
    }

    /// Moves a piece from one square to another.
    /// Returns the captured piece, if any.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.squares[from.index() as usize].take();
        std::mem::replace(&mut self.squares[to.index() as usize], piece)
    }

    /// Returns true if the given square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns true if the given square contains a piece of the given color.
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Returns true if the given square contains an enemy piece.
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.is_color(square, color.opponent())
    }

    /// Finds the king of the given color, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(square, _)| square)
    }

    /// Iterates over the pieces of one color in square-index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// Returns the number of occupied squares.
    pub fn population(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    #[test]
    fn test_initial_position() {
        let board = Board::initial_position();

        assert_eq!(
            board.piece_at(sq(4, 0)),
            Some(Piece::new(PieceType::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(4, 7)),
            Some(Piece::new(PieceType::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq(0, 0)),
            Some(Piece::new(PieceType::Rook, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(3, 7)),
            Some(Piece::new(PieceType::Queen, Color::Black))
        );

        for file in 0..8 {
            assert_eq!(
                board.piece_at(sq(file, 1)),
                Some(Piece::new(PieceType::Pawn, Color::White))
            );
            assert_eq!(
                board.piece_at(sq(file, 6)),
                Some(Piece::new(PieceType::Pawn, Color::Black))
            );
            for rank in 2..6 {
                assert!(board.is_empty(sq(file, rank)));
            }
        }

        assert_eq!(board.population(), 32);
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::initial_position();

        let captured = board.move_piece(sq(4, 1), sq(4, 2));
        assert!(captured.is_none());
        assert!(board.is_empty(sq(4, 1)));
        assert_eq!(
            board.piece_at(sq(4, 2)),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );

        // Rook takes the black pawn straight up the a-file.
        board.set_piece(sq(0, 1), None);
        let captured = board.move_piece(sq(0, 0), sq(0, 6));
        assert_eq!(captured, Some(Piece::new(PieceType::Pawn, Color::Black)));
        assert_eq!(board.population(), 30);
    }

    #[test]
    fn test_king_square() {
        let mut board = Board::initial_position();
        assert_eq!(board.king_square(Color::White), Some(sq(4, 0)));
        assert_eq!(board.king_square(Color::Black), Some(sq(4, 7)));

        board.set_piece(sq(4, 7), None);
        assert_eq!(board.king_square(Color::Black), None);
    }

    #[test]
    fn test_color_queries() {
        let board = Board::initial_position();
        assert!(board.is_color(sq(0, 0), Color::White));
        assert!(board.is_enemy(sq(0, 7), Color::White));
        assert!(!board.is_enemy(sq(0, 3), Color::White));
        assert_eq!(board.pieces(Color::Black).count(), 16);
    }
}
