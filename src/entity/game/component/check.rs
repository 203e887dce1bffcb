use super::board::{ChessBoard, Line};
use super::coord::Coord;
use super::piece_move;
use super::square::{Color, Piece, Switch, TypePiece};

/// Does `attacker` attack the square `target`?
///
/// Sliding pieces attack a square only when it is the first piece met along
/// their line.
pub fn attacks(board: &ChessBoard, attacker: &Piece, target: Coord) -> bool {
    let from = attacker.location();
    let (dx, dy) = from.delta(&target);
    match attacker.type_piece() {
        TypePiece::Pawn => dx.abs() == 1 && dy == attacker.color().forward(),
        TypePiece::Knight => piece_move::is_knight_shape(dx, dy),
        TypePiece::King => piece_move::is_king_shape(dx, dy),
        TypePiece::Rook => {
            Line::between(&from, &target).is_straight() && is_first_on_path(board, from, target)
        }
        TypePiece::Bishop => {
            Line::between(&from, &target) == Line::Diagonal && is_first_on_path(board, from, target)
        }
        TypePiece::Queen => {
            matches!(
                Line::between(&from, &target),
                Line::File | Line::Rank | Line::Diagonal
            ) && is_first_on_path(board, from, target)
        }
    }
}

fn is_first_on_path(board: &ChessBoard, from: Coord, target: Coord) -> bool {
    match board.pieces_on_path(from, target).as_slice() {
        [only] => only.location() == target,
        _ => false,
    }
}

/// Is the king of `color` attacked by any piece of the other color?
///
/// A side without king on the board is never in check.
pub fn is_in_check(board: &ChessBoard, color: Color) -> bool {
    match board.king(color) {
        None => false,
        Some(king) => board
            .pieces_of(color.switch())
            .any(|attacker| attacks(board, attacker, king)),
    }
}

/// Pieces of the other color attacking the king of `color`.
pub fn checking_pieces(board: &ChessBoard, color: Color) -> Vec<Piece> {
    match board.king(color) {
        None => vec![],
        Some(king) => board
            .pieces_of(color.switch())
            .filter(|attacker| attacks(board, attacker, king))
            .copied()
            .collect(),
    }
}
