use std::fmt;

use super::coord::{Coord, BOARD_SIZE};
use super::square::{Color, Piece, Square, TypePiece};

const BACK_RANK: [TypePiece; 8] = [
    TypePiece::Rook,
    TypePiece::Knight,
    TypePiece::Bishop,
    TypePiece::Queen,
    TypePiece::King,
    TypePiece::Bishop,
    TypePiece::Knight,
    TypePiece::Rook,
];

/// Geometric relation between two squares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Line {
    Same,
    File,
    Rank,
    Diagonal,
    None,
}

impl Line {
    pub fn between(from: &Coord, to: &Coord) -> Line {
        let (dx, dy) = from.delta(to);
        match (dx, dy) {
            (0, 0) => Line::Same,
            (0, _) => Line::File,
            (_, 0) => Line::Rank,
            (dx, dy) if dx.abs() == dy.abs() => Line::Diagonal,
            _ => Line::None,
        }
    }
    pub fn is_straight(&self) -> bool {
        matches!(self, Line::File | Line::Rank)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ChessBoard {
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl ChessBoard {
    pub fn empty() -> Self {
        ChessBoard::default()
    }

    /// Standard starting position: Black on rows 0 and 1, White on rows 6 and 7.
    pub fn initial_position() -> Self {
        let mut board = ChessBoard::empty();
        for (x, type_piece) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            board.add(square(x, 0), *type_piece, Color::Black);
            board.add(square(x, 1), TypePiece::Pawn, Color::Black);
            board.add(square(x, 6), TypePiece::Pawn, Color::White);
            board.add(square(x, 7), *type_piece, Color::White);
        }
        board
    }

    pub fn at(&self, coord: Coord) -> Square {
        self.squares[coord.y() as usize][coord.x() as usize]
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.squares[coord.y() as usize][coord.x() as usize].piece()
    }

    pub fn squares(&self) -> &[[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        &self.squares
    }

    /// Put a new piece on an empty square.
    pub fn add(&mut self, coord: Coord, type_piece: TypePiece, color: Color) {
        assert!(
            self.at(coord).is_empty(),
            "Internal error: square {} is already occupied",
            coord
        );
        assert!(
            type_piece != TypePiece::King || self.king(color).is_none(),
            "Internal error: a second {} king cannot be added",
            color
        );
        self.set(coord, Square::NonEmpty(Piece::new(type_piece, color, coord)));
    }

    pub(crate) fn remove(&mut self, coord: Coord) -> Option<Piece> {
        let removed = self.at(coord).piece().copied();
        self.set(coord, Square::Empty);
        removed
    }

    /// Move the piece standing on `from` to `to` and return the piece previously on `to`.
    pub(crate) fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let mut piece = match self.at(from) {
            Square::NonEmpty(piece) => piece,
            Square::Empty => panic!("Internal error: no piece to move on {}", from),
        };
        let captured = self.remove(to);
        self.set(from, Square::Empty);
        piece.set_location(to);
        self.set(to, Square::NonEmpty(piece));
        captured
    }

    fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.y() as usize][coord.x() as usize] = square;
    }

    /// Pieces met when walking from `from` (excluded) to `to` (included).
    ///
    /// Walks only along a file, a rank or a diagonal. Any other relation
    /// (a knight jump for instance) yields no piece at all.
    pub fn pieces_on_path(&self, from: Coord, to: Coord) -> Vec<Piece> {
        let line = Line::between(&from, &to);
        if matches!(line, Line::Same | Line::None) {
            return vec![];
        }
        let (dx, dy) = from.delta(&to);
        let (step_x, step_y) = (dx.signum(), dy.signum());
        let mut pieces = vec![];
        let mut current = from;
        while current != to {
            current = match current.offset(step_x, step_y) {
                Some(next) => next,
                None => break,
            };
            if let Some(piece) = self.piece_at(current) {
                pieces.push(*piece);
            }
        }
        pieces
    }

    /// True when no piece stands strictly between `from` and `to`.
    pub fn path_clear(&self, from: Coord, to: Coord) -> bool {
        self.pieces_on_path(from, to)
            .iter()
            .all(|piece| piece.location() == to)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|square| square.piece())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    pub fn king(&self, color: Color) -> Option<Coord> {
        self.pieces_of(color)
            .find(|piece| piece.type_piece() == TypePiece::King)
            .map(|piece| piece.location())
    }

    /// Every occupied cell holds a piece whose location is that cell.
    pub fn is_consistent(&self) -> bool {
        Coord::all().all(|coord| match self.piece_at(coord) {
            Some(piece) => piece.location() == coord,
            None => true,
        })
    }
}

fn square(x: u8, y: u8) -> Coord {
    Coord::new(x, y).expect("Internal error: square out of the board")
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (i, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - i)?;
            for (j, square) in row.iter().enumerate() {
                let color = if (i + j) % 2 == 0 {
                    "\x1B[47m" // light square
                } else {
                    "\x1B[100m" // dark square
                };
                write!(f, "{}{} \x1B[0m", color, square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coord {
        Coord::from_conventional(s).unwrap()
    }

    #[test]
    fn test_chessboard_empty() {
        let board = ChessBoard::empty();

        assert_eq!(board.at(coord("A1")), Square::Empty);
        assert_eq!(board.at(coord("H8")), Square::Empty);
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn test_initial_position() {
        let board = ChessBoard::initial_position();

        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.king(Color::White), Some(coord("E1")));
        assert_eq!(board.king(Color::Black), Some(coord("E8")));
        let queen = board.piece_at(coord("D1")).unwrap();
        assert_eq!(queen.type_piece(), TypePiece::Queen);
        assert_eq!(queen.color(), Color::White);
        let pawn = board.piece_at(coord("C7")).unwrap();
        assert_eq!(pawn.type_piece(), TypePiece::Pawn);
        assert_eq!(pawn.color(), Color::Black);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_chessboard_move() {
        let mut board = ChessBoard::empty();
        board.add(coord("A1"), TypePiece::Rook, Color::White);
        board.add(coord("B2"), TypePiece::Knight, Color::Black);

        let captured = board.move_piece(coord("A1"), coord("B2"));

        assert_eq!(board.at(coord("A1")), Square::Empty);
        assert_eq!(captured.map(|p| p.type_piece()), Some(TypePiece::Knight));
        let rook = board.piece_at(coord("B2")).unwrap();
        assert_eq!(rook.type_piece(), TypePiece::Rook);
        assert_eq!(rook.location(), coord("B2"));
        assert!(board.is_consistent());
    }

    #[test]
    #[should_panic]
    fn test_add_on_occupied_square() {
        let mut board = ChessBoard::empty();
        board.add(coord("A1"), TypePiece::Rook, Color::White);
        board.add(coord("A1"), TypePiece::Rook, Color::Black);
    }

    #[test]
    #[should_panic]
    fn test_add_second_king() {
        let mut board = ChessBoard::empty();
        board.add(coord("E1"), TypePiece::King, Color::White);
        board.add(coord("E3"), TypePiece::King, Color::White);
    }

    #[test]
    fn test_line_between() {
        assert_eq!(Line::between(&coord("A1"), &coord("A1")), Line::Same);
        assert_eq!(Line::between(&coord("A1"), &coord("A8")), Line::File);
        assert_eq!(Line::between(&coord("A1"), &coord("H1")), Line::Rank);
        assert_eq!(Line::between(&coord("C1"), &coord("F4")), Line::Diagonal);
        assert_eq!(Line::between(&coord("B1"), &coord("C3")), Line::None);
    }

    #[test]
    fn test_pieces_on_path() {
        let mut board = ChessBoard::empty();
        board.add(coord("A1"), TypePiece::Rook, Color::White);
        board.add(coord("A4"), TypePiece::Pawn, Color::White);
        board.add(coord("A8"), TypePiece::King, Color::Black);

        let pieces = board.pieces_on_path(coord("A1"), coord("A8"));
        let locations: Vec<Coord> = pieces.iter().map(|p| p.location()).collect();
        assert_eq!(locations, vec![coord("A4"), coord("A8")]);
        assert!(!board.path_clear(coord("A1"), coord("A8")));
        // walking backwards gives the reverse order, origin excluded
        let pieces = board.pieces_on_path(coord("A8"), coord("A1"));
        let locations: Vec<Coord> = pieces.iter().map(|p| p.location()).collect();
        assert_eq!(locations, vec![coord("A4"), coord("A1")]);
        // destination occupied but nothing in between
        assert!(board.path_clear(coord("A1"), coord("A4")));
    }

    #[test]
    fn test_path_clear_non_geometric() {
        let board = ChessBoard::initial_position();
        // knight jump: never blocked
        assert!(board.path_clear(coord("B1"), coord("C3")));
        assert!(board.pieces_on_path(coord("B1"), coord("C3")).is_empty());
        // same square
        assert!(board.path_clear(coord("B1"), coord("B1")));
        // diagonal blocked by the pawn on D2
        assert!(!board.path_clear(coord("C1"), coord("E3")));
    }
}
