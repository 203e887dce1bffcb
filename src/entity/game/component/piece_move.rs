//! Movement shapes of the pieces, independent of the board occupancy.

use std::fmt;

use super::coord::Coord;
use super::square::{Color, Piece, TypePiece};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMoveReason {
    NullMove,
    Shape,
    Blocked,
    PawnForwardCapture,
    PawnDiagonalWithoutCapture,
    PawnDoubleStepNotFromStart,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IllegalMoveReason::NullMove => "the piece must leave its square",
            IllegalMoveReason::Shape => "the piece cannot move that way",
            IllegalMoveReason::Blocked => "the path is blocked",
            IllegalMoveReason::PawnForwardCapture => "a pawn cannot capture straight ahead",
            IllegalMoveReason::PawnDiagonalWithoutCapture => {
                "a pawn moves diagonally only to capture"
            }
            IllegalMoveReason::PawnDoubleStepNotFromStart => {
                "a pawn advances two squares only from its starting rank"
            }
        };
        write!(f, "{}", reason)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PawnShape {
    Advance,
    DoubleAdvance,
    Diagonal,
}

pub fn is_rook_shape(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

pub fn is_bishop_shape(dx: i8, dy: i8) -> bool {
    dx != 0 && dx.abs() == dy.abs()
}

pub fn is_queen_shape(dx: i8, dy: i8) -> bool {
    is_rook_shape(dx, dy) || is_bishop_shape(dx, dy)
}

pub fn is_king_shape(dx: i8, dy: i8) -> bool {
    dx.abs() <= 1 && dy.abs() <= 1 && is_queen_shape(dx, dy)
}

pub fn is_knight_shape(dx: i8, dy: i8) -> bool {
    matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1))
}

pub fn pawn_shape(color: Color, dx: i8, dy: i8) -> Option<PawnShape> {
    let forward = color.forward();
    match (dx.abs(), dy) {
        (0, dy) if dy == forward => Some(PawnShape::Advance),
        (0, dy) if dy == 2 * forward => Some(PawnShape::DoubleAdvance),
        (1, dy) if dy == forward => Some(PawnShape::Diagonal),
        _ => None,
    }
}

/// Geometric legality of moving `piece` to `to`.
///
/// For pawns the shape is returned so that the capture resolution can tell
/// an advance from a diagonal step.
pub fn shape_gate(piece: &Piece, to: Coord) -> Result<Option<PawnShape>, IllegalMoveReason> {
    let from = piece.location();
    let (dx, dy) = from.delta(&to);
    if (dx, dy) == (0, 0) {
        return Err(IllegalMoveReason::NullMove);
    }
    let is_legal = match piece.type_piece() {
        TypePiece::Rook => is_rook_shape(dx, dy),
        TypePiece::Bishop => is_bishop_shape(dx, dy),
        TypePiece::Queen => is_queen_shape(dx, dy),
        TypePiece::King => is_king_shape(dx, dy),
        TypePiece::Knight => is_knight_shape(dx, dy),
        TypePiece::Pawn => {
            return match pawn_shape(piece.color(), dx, dy) {
                None => Err(IllegalMoveReason::Shape),
                Some(PawnShape::DoubleAdvance) if from.y() != piece.color().pawn_row() => {
                    Err(IllegalMoveReason::PawnDoubleStepNotFromStart)
                }
                Some(shape) => Ok(Some(shape)),
            }
        }
    };
    if is_legal {
        Ok(None)
    } else {
        Err(IllegalMoveReason::Shape)
    }
}

/// Knights jump, every other piece slides.
pub fn is_blockable(type_piece: TypePiece) -> bool {
    type_piece != TypePiece::Knight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(type_piece: TypePiece, color: Color, s: &str) -> Piece {
        Piece::new(type_piece, color, Coord::from_conventional(s).unwrap())
    }

    fn coord(s: &str) -> Coord {
        Coord::from_conventional(s).unwrap()
    }

    #[test]
    fn test_rook_shape() {
        let rook = piece(TypePiece::Rook, Color::White, "A1");
        assert!(shape_gate(&rook, coord("A8")).is_ok());
        assert!(shape_gate(&rook, coord("H1")).is_ok());
        assert_eq!(shape_gate(&rook, coord("B2")), Err(IllegalMoveReason::Shape));
        assert_eq!(
            shape_gate(&rook, coord("A1")),
            Err(IllegalMoveReason::NullMove)
        );
    }

    #[test]
    fn test_bishop_shape() {
        let bishop = piece(TypePiece::Bishop, Color::White, "C1");
        assert!(shape_gate(&bishop, coord("H6")).is_ok());
        assert!(shape_gate(&bishop, coord("A3")).is_ok());
        assert_eq!(
            shape_gate(&bishop, coord("C4")),
            Err(IllegalMoveReason::Shape)
        );
    }

    #[test]
    fn test_queen_and_king_shape() {
        let queen = piece(TypePiece::Queen, Color::Black, "D8");
        assert!(shape_gate(&queen, coord("D1")).is_ok());
        assert!(shape_gate(&queen, coord("H4")).is_ok());
        assert!(shape_gate(&queen, coord("E6")).is_err());
        let king = piece(TypePiece::King, Color::Black, "E8");
        assert!(shape_gate(&king, coord("D7")).is_ok());
        assert!(shape_gate(&king, coord("E7")).is_ok());
        assert!(shape_gate(&king, coord("E6")).is_err());
        assert!(shape_gate(&king, coord("G8")).is_err());
    }

    #[test]
    fn test_knight_shape() {
        let knight = piece(TypePiece::Knight, Color::White, "B1");
        for target in ["A3", "C3", "D2"] {
            assert!(shape_gate(&knight, coord(target)).is_ok(), "{}", target);
        }
        for target in ["B3", "C2", "D3"] {
            assert!(shape_gate(&knight, coord(target)).is_err(), "{}", target);
        }
    }

    #[test]
    fn test_pawn_shape_depends_on_color() {
        let white = piece(TypePiece::Pawn, Color::White, "E2");
        assert_eq!(shape_gate(&white, coord("E3")), Ok(Some(PawnShape::Advance)));
        assert_eq!(
            shape_gate(&white, coord("E4")),
            Ok(Some(PawnShape::DoubleAdvance))
        );
        assert_eq!(shape_gate(&white, coord("D3")), Ok(Some(PawnShape::Diagonal)));
        assert_eq!(shape_gate(&white, coord("E1")), Err(IllegalMoveReason::Shape));
        assert_eq!(shape_gate(&white, coord("E5")), Err(IllegalMoveReason::Shape));

        let black = piece(TypePiece::Pawn, Color::Black, "D7");
        assert_eq!(shape_gate(&black, coord("D6")), Ok(Some(PawnShape::Advance)));
        assert_eq!(
            shape_gate(&black, coord("D5")),
            Ok(Some(PawnShape::DoubleAdvance))
        );
        assert_eq!(shape_gate(&black, coord("D8")), Err(IllegalMoveReason::Shape));
    }

    #[test]
    fn test_pawn_double_step_only_from_start() {
        let pawn = piece(TypePiece::Pawn, Color::White, "E3");
        assert_eq!(
            shape_gate(&pawn, coord("E5")),
            Err(IllegalMoveReason::PawnDoubleStepNotFromStart)
        );
    }
}
