use std::fmt;

use super::coord::Coord;
use super::square::{Color, Piece, TypePiece};

/// A move that has been applied to the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HistoricalMove {
    type_piece: TypePiece,
    color: Color,
    from: Coord,
    to: Coord,
    captured: Option<Piece>,
    en_passant: bool,
}

impl HistoricalMove {
    pub fn new(
        type_piece: TypePiece,
        color: Color,
        from: Coord,
        to: Coord,
        captured: Option<Piece>,
        en_passant: bool,
    ) -> Self {
        HistoricalMove {
            type_piece,
            color,
            from,
            to,
            captured,
            en_passant,
        }
    }
    pub fn type_piece(&self) -> TypePiece {
        self.type_piece
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn from(&self) -> Coord {
        self.from
    }
    pub fn to(&self) -> Coord {
        self.to
    }
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }
    pub fn is_pawn_double_step(&self) -> bool {
        let (dx, dy) = self.from.delta(&self.to);
        self.type_piece == TypePiece::Pawn && dx == 0 && dy.abs() == 2
    }
}

impl fmt::Display for HistoricalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}{}",
            self.color,
            self.type_piece,
            self.from,
            if self.captured.is_some() { "x" } else { "-" },
            self.to
        )?;
        if self.en_passant {
            write!(f, " e.p.")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<HistoricalMove>,
}

impl History {
    pub fn add_move(&mut self, m: HistoricalMove) {
        self.moves.push(m);
    }
    pub fn last(&self) -> Option<&HistoricalMove> {
        self.moves.last()
    }
    pub fn moves(&self) -> &[HistoricalMove] {
        &self.moves
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
