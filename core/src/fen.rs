//! Position notation: the piece-placement and side-to-move fields of FEN.
//!
//! Castling and en passant do not exist in this game, so any FEN fields after
//! the side to move are accepted and ignored.
use crate::board::Board;
use crate::game_state::GameState;
use crate::types::{Color, File, Piece, PieceType, Rank, Square};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FenError {
    #[error("invalid FEN format: {0}")]
    InvalidFormat(String),
    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl GameState {
    /// Parses `"<placement> [w|b] ..."`. The side to move defaults to White.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();

        let placement = parts
            .next()
            .ok_or_else(|| FenError::InvalidFormat("empty string".to_string()))?;
        let board = Board::from_placement(placement)?;

        let side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidColor(other.to_string())),
        };

        Ok(GameState::from_board(board, side_to_move))
    }

    /// Writes the placement and side-to-move fields.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {}",
            self.board().to_placement(),
            if self.side_to_move() == Color::White { "w" } else { "b" }
        )
    }
}

impl Board {
    /// Parses the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != 8 {
            return Err(FenError::InvalidFormat(format!(
                "Expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN starts from rank 8 (index 7) down to rank 1 (index 0)
            let rank = Rank::new(7 - rank_idx as u8)
                .ok_or_else(|| FenError::InvalidFormat(format!("rank {}", 8 - rank_idx)))?;
            let mut file_idx = 0u8;

            for ch in rank_str.chars() {
                if let Some(empty_count) = ch.to_digit(10) {
                    file_idx = file_idx.saturating_add(empty_count as u8);
                    continue;
                }

                let file = File::new(file_idx).ok_or_else(|| {
                    FenError::InvalidFormat(format!("Too many squares in rank {}", 8 - rank_idx))
                })?;
                board.set_piece(Square::new(file, rank), Some(piece_from_char(ch)?));
                file_idx += 1;
            }

            if file_idx != 8 {
                return Err(FenError::InvalidFormat(format!(
                    "Rank {} has {} squares, expected 8",
                    8 - rank_idx,
                    file_idx
                )));
            }
        }

        Ok(board)
    }

    /// Writes the board as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut fen = String::new();

        for rank_idx in (0..8).rev() {
            let mut empty_count = 0;

            for file_idx in 0..8 {
                let square = match (File::new(file_idx), Rank::new(rank_idx)) {
                    (Some(file), Some(rank)) => Square::new(file, rank),
                    _ => continue,
                };

                match self.piece_at(square) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece_to_char(piece));
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank_idx > 0 {
                fen.push('/');
            }
        }

        fen
    }
}

fn piece_to_char(piece: Piece) -> char {
    let ch = match piece.piece_type {
        PieceType::Pawn => 'p',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };

    if piece.color == Color::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

fn piece_from_char(ch: char) -> Result<Piece, FenError> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let piece_type = match ch.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return Err(FenError::InvalidPiece(ch)),
    };

    Ok(Piece::new(piece_type, color))
}

/// Named positions.
pub mod positions {
    /// Starting position.
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Black's king boxed in by its own pawns on White's back rank: Black has no move.
    pub const BLACK_IMMOBILE: &str = "7K/8/8/8/8/8/pp6/kp6 b";
}
