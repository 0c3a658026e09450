use std::fmt;

use crate::error::EngineError;

/// Represents one of the two players.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the rank holding this color's pieces at the start.
    pub const fn back_rank(self) -> Rank {
        match self {
            Color::White => Rank(0),
            Color::Black => Rank(7),
        }
    }

    /// Returns the starting rank for pawns of this color.
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank(1),
            Color::Black => Rank(6),
        }
    }

    /// Returns the rank on which pawns of this color promote.
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Color::White => Rank(7),
            Color::Black => Rank(0),
        }
    }

    /// Returns the direction pawns of this color move.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// The six kinds of chess pieces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Returns the English name of this piece type.
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }
}

/// A chess piece with both type and color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Creates a new piece with the given type and color.
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Returns the Unicode chess glyph for this piece.
    pub const fn symbol(self) -> char {
        match (self.piece_type, self.color) {
            (PieceType::King, Color::White) => '♔',
            (PieceType::Queen, Color::White) => '♕',
            (PieceType::Rook, Color::White) => '♖',
            (PieceType::Bishop, Color::White) => '♗',
            (PieceType::Knight, Color::White) => '♘',
            (PieceType::Pawn, Color::White) => '♙',
            (PieceType::King, Color::Black) => '♚',
            (PieceType::Queen, Color::Black) => '♛',
            (PieceType::Rook, Color::Black) => '♜',
            (PieceType::Bishop, Color::Black) => '♝',
            (PieceType::Knight, Color::Black) => '♞',
            (PieceType::Pawn, Color::Black) => '♟',
        }
    }
}

/// A file on the board (a-h).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct File(u8);

impl File {
    /// Creates a new file from index (0-7).
    /// Returns None if index is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 { Some(File(index)) } else { None }
    }

    /// Creates a file from a character ('a'-'h').
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Returns the file as a character ('a'-'h').
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Returns the file index (0-7).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file `delta` steps away, if it is on the board.
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let new_file = self.0 as i8 + delta;
        if new_file >= 0 && new_file < 8 {
            Some(File(new_file as u8))
        } else {
            None
        }
    }
}

/// A rank on the board (1-8).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Creates a new rank from index (0-7).
    /// Returns None if index is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 { Some(Rank(index)) } else { None }
    }

    /// Creates a rank from a digit ('1'-'8').
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Rank(c as u8 - b'1')),
            _ => None,
        }
    }

    /// Returns the rank as a character ('1'-'8').
    pub const fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Returns the rank index (0-7).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank `delta` steps away, if it is on the board.
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let new_rank = self.0 as i8 + delta;
        if new_rank >= 0 && new_rank < 8 {
            Some(Rank(new_rank as u8))
        } else {
            None
        }
    }
}

/// A square on the board, stored as `rank * 8 + file`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a new square from file and rank.
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.0 * 8 + file.0)
    }

    /// Creates a square from index (0-63).
    /// Returns None if index is out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Validates raw `(file, rank)` coordinates coming from outside the engine.
    pub fn from_coords(file: u8, rank: u8) -> Result<Self, EngineError> {
        match (File::new(file), Rank::new(rank)) {
            (Some(f), Some(r)) => Ok(Square::new(f, r)),
            _ => Err(EngineError::OutOfBoundsSquare { file, rank }),
        }
    }

    /// Parses algebraic notation such as `e4`.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// Returns the file of this square.
    pub const fn file(self) -> File {
        File(self.0 % 8)
    }

    /// Returns the rank of this square.
    pub const fn rank(self) -> Rank {
        Rank(self.0 / 8)
    }

    /// Returns the square index (0-63).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the square shifted by `(df, dr)`, or None if that leaves the board.
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        match (self.file().offset(df), self.rank().offset(dr)) {
            (Some(file), Some(rank)) => Some(Square::new(file, rank)),
            _ => None,
        }
    }

    /// Iterates over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

/// A move from one square to another.
///
/// Promotion is implied: a pawn reaching its promotion rank always becomes a queen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A set of squares, one bit per square index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    /// A set with no squares.
    pub const EMPTY: Self = SquareSet(0);

    /// Creates a set with a single square.
    pub const fn from_square(square: Square) -> Self {
        SquareSet(1u64 << square.0)
    }

    /// Returns true if the given square is in the set.
    pub const fn contains(self, square: Square) -> bool {
        (self.0 & (1u64 << square.0)) != 0
    }

    /// Adds a square to the set.
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.0;
    }

    /// Returns the number of squares in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set holds no squares.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of two sets.
    pub const fn union(self, other: Self) -> Self {
        SquareSet(self.0 | other.0)
    }

    /// Returns an iterator over the squares in index order.
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter { bits: self.0 }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the squares of a `SquareSet`.
pub struct SquareSetIter {
    bits: u64,
}

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let index = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1; // Clear lowest set bit
            Some(Square(index))
        }
    }
}
