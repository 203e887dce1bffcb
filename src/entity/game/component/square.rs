use std::fmt;

use super::coord::Coord;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypePiece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl TypePiece {
    pub fn name(&self) -> &'static str {
        match self {
            TypePiece::Pawn => "Pawn",
            TypePiece::Knight => "Knight",
            TypePiece::Bishop => "Bishop",
            TypePiece::Rook => "Rook",
            TypePiece::Queen => "Queen",
            TypePiece::King => "King",
        }
    }
    /// Numerical code used by the numerical board rendering, 0 being an empty square.
    pub fn code(&self) -> u8 {
        match self {
            TypePiece::Pawn => 1,
            TypePiece::Knight => 2,
            TypePiece::Bishop => 3,
            TypePiece::Rook => 4,
            TypePiece::Queen => 5,
            TypePiece::King => 6,
        }
    }
    pub fn initial(&self) -> char {
        match self {
            TypePiece::Knight => 'N',
            _ => self.name().chars().next().unwrap_or(' '),
        }
    }
}

impl fmt::Display for TypePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

pub trait Switch {
    fn switch(&self) -> Self;
}

impl Switch for Color {
    fn switch(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Color {
    /// Row increment of a pawn moving forward.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// Row where the pawns of this color start.
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    type_piece: TypePiece,
    color: Color,
    location: Coord,
}

impl Piece {
    pub fn new(type_piece: TypePiece, color: Color, location: Coord) -> Self {
        Piece {
            type_piece,
            color,
            location,
        }
    }
    pub fn type_piece(&self) -> TypePiece {
        self.type_piece
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn location(&self) -> Coord {
        self.location
    }
    /// Only the board may relocate a piece, so that the cell and the piece agree.
    pub(super) fn set_location(&mut self, location: Coord) {
        self.location = location;
    }
    pub fn identity(&self) -> String {
        format!("{} {} at {}", self.color, self.type_piece, self.location)
    }
    pub fn symbol(&self) -> char {
        match (self.type_piece, self.color) {
            (TypePiece::Rook, Color::White) => '♖',
            (TypePiece::Knight, Color::White) => '♘',
            (TypePiece::Bishop, Color::White) => '♗',
            (TypePiece::Queen, Color::White) => '♕',
            (TypePiece::King, Color::White) => '♔',
            (TypePiece::Pawn, Color::White) => '♙',
            (TypePiece::Rook, Color::Black) => '♜',
            (TypePiece::Knight, Color::Black) => '♞',
            (TypePiece::Bishop, Color::Black) => '♝',
            (TypePiece::Queen, Color::Black) => '♛',
            (TypePiece::King, Color::Black) => '♚',
            (TypePiece::Pawn, Color::Black) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Square {
    #[default]
    Empty,
    NonEmpty(Piece),
}

impl Square {
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Square::Empty => None,
            Square::NonEmpty(piece) => Some(piece),
        }
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::NonEmpty(piece) => write!(f, "{}", piece.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_color() {
        assert_eq!(Color::White.switch(), Color::Black);
        assert_eq!(Color::Black.switch(), Color::White);
    }

    #[test]
    fn test_piece_identity() {
        let piece = Piece::new(
            TypePiece::Knight,
            Color::Black,
            Coord::from('G', 8).unwrap(),
        );
        assert_eq!(piece.identity(), "Black Knight at G8");
        assert_eq!(piece.type_piece().initial(), 'N');
        assert_eq!(TypePiece::King.code(), 6);
    }
}
