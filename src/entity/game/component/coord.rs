//! Squares of the board, in index space and in conventional notation.
//!
//! Index space is `(x, y)` with `x` the file (A = 0) and `y` the row seen
//! from Black's side: row 0 is rank 8 and row 7 is rank 1.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid file '{0}': expected a letter between A and H")]
    InvalidFile(char),
    #[error("invalid rank '{0}': expected a digit between 1 and 8")]
    InvalidRank(char),
    #[error("index ({x}, {y}) is outside of the board")]
    OutOfBoard { x: i16, y: i16 },
    #[error("'{0}' is not a square: expected a file letter followed by a rank digit, like E2")]
    Malformed(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Result<Self, CoordError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Coord { x, y })
        } else {
            Err(CoordError::OutOfBoard {
                x: x as i16,
                y: y as i16,
            })
        }
    }
    /// Build a square from its file letter (case insensitive) and its rank.
    pub fn from(col: char, rank: u8) -> Result<Self, CoordError> {
        let col = col.to_ascii_uppercase();
        if !('A'..='H').contains(&col) {
            return Err(CoordError::InvalidFile(col));
        }
        if !(1..=BOARD_SIZE).contains(&rank) {
            return Err(CoordError::InvalidRank(
                char::from_digit(rank as u32, 10).unwrap_or('?'),
            ));
        }
        Ok(Coord {
            x: col as u8 - b'A',
            y: BOARD_SIZE - rank,
        })
    }
    pub fn from_conventional(s: &str) -> Result<Self, CoordError> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(rank), None) => {
                let rank = rank
                    .to_digit(10)
                    .filter(|r| (1..=BOARD_SIZE as u32).contains(r))
                    .ok_or(CoordError::InvalidRank(rank))?;
                Coord::from(col, rank as u8)
            }
            _ => Err(CoordError::Malformed(s.to_string())),
        }
    }
    pub fn x(&self) -> u8 {
        self.x
    }
    pub fn y(&self) -> u8 {
        self.y
    }
    pub fn col(&self) -> char {
        (b'A' + self.x) as char
    }
    pub fn rank(&self) -> u8 {
        BOARD_SIZE - self.y
    }
    pub fn to_conventional(&self) -> String {
        format!("{}{}", self.col(), self.rank())
    }
    /// Signed distance `(dx, dy)` from `self` to `other`.
    pub fn delta(&self, other: &Coord) -> (i8, i8) {
        (
            other.x as i8 - self.x as i8,
            other.y as i8 - self.y as i8,
        )
    }
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.rank())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_conventional(s)
    }
}

pub fn to_index(conventional: &str) -> Result<(u8, u8), CoordError> {
    let coord = Coord::from_conventional(conventional)?;
    Ok((coord.x, coord.y))
}

pub fn to_conventional(index: (u8, u8)) -> Result<String, CoordError> {
    Coord::new(index.0, index.1).map(|coord| coord.to_conventional())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_from() {
        assert_eq!(Coord::from('A', 8).unwrap(), Coord::new(0, 0).unwrap());
        assert_eq!(Coord::from('h', 1).unwrap(), Coord::new(7, 7).unwrap());
        assert_eq!(Coord::from('I', 1), Err(CoordError::InvalidFile('I')));
        assert_eq!(Coord::from('A', 9), Err(CoordError::InvalidRank('9')));
        assert_eq!(Coord::from('A', 0), Err(CoordError::InvalidRank('0')));
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index("A8"), Ok((0, 0)));
        assert_eq!(to_index("e2"), Ok((4, 6)));
        assert_eq!(to_index("H1"), Ok((7, 7)));
        assert!(to_index("J1").is_err());
        assert!(to_index("A9").is_err());
        assert!(to_index("AA").is_err());
        assert_eq!(to_index("E"), Err(CoordError::Malformed("E".to_string())));
        assert_eq!(
            to_index("E22"),
            Err(CoordError::Malformed("E22".to_string()))
        );
    }

    #[test]
    fn test_to_conventional() {
        assert_eq!(to_conventional((0, 0)), Ok("A8".to_string()));
        assert_eq!(to_conventional((3, 4)), Ok("D4".to_string()));
        assert_eq!(
            to_conventional((8, 0)),
            Err(CoordError::OutOfBoard { x: 8, y: 0 })
        );
    }

    #[test]
    fn test_round_trip_all_squares() {
        let mut n = 0;
        for coord in Coord::all() {
            let conventional = to_conventional((coord.x(), coord.y())).unwrap();
            assert_eq!(to_index(&conventional), Ok((coord.x(), coord.y())));
            assert_eq!(conventional.parse::<Coord>(), Ok(coord));
            n += 1;
        }
        assert_eq!(n, 64);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a8 = Coord::from('A', 8).unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Coord::from('B', 7).unwrap()));
        assert_eq!(a8.delta(&Coord::from('C', 7).unwrap()), (2, 1));
    }
}
