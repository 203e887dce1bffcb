use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::board::ChessBoard;
use super::square::Square;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// 0 for an empty square, 1 (pawn) to 6 (king) otherwise.
    #[default]
    Numerical,
    /// Piece names.
    Lexical,
    /// Piece initials.
    Characterial,
    /// Conventional location of each piece.
    Locational,
    /// Piece color only, `W` or `B`.
    Colored,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown display mode '{0}'")]
pub struct UnknownDisplayMode(pub String);

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numerical" => Ok(DisplayMode::Numerical),
            "lexical" => Ok(DisplayMode::Lexical),
            "characterial" => Ok(DisplayMode::Characterial),
            "locational" => Ok(DisplayMode::Locational),
            "colored" | "color" => Ok(DisplayMode::Colored),
            _ => Err(UnknownDisplayMode(s.to_string())),
        }
    }
}

/// Rendering of every cell of the board, row 0 (rank 8) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    mode: DisplayMode,
    rows: Vec<Vec<String>>,
}

impl BoardSnapshot {
    pub fn build(board: &ChessBoard, mode: DisplayMode) -> Self {
        let rows = board
            .squares()
            .iter()
            .map(|row| row.iter().map(|square| render(square, mode)).collect())
            .collect();
        BoardSnapshot { mode, rows }
    }
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn render(square: &Square, mode: DisplayMode) -> String {
    match (square.piece(), mode) {
        (None, DisplayMode::Numerical) => "0".to_string(),
        (None, DisplayMode::Locational) => "  ".to_string(),
        (None, _) => " ".to_string(),
        (Some(piece), DisplayMode::Numerical) => piece.type_piece().code().to_string(),
        (Some(piece), DisplayMode::Lexical) => piece.type_piece().name().to_string(),
        (Some(piece), DisplayMode::Characterial) => piece.type_piece().initial().to_string(),
        (Some(piece), DisplayMode::Locational) => piece.location().to_conventional(),
        (Some(piece), DisplayMode::Colored) => piece.color().name()[..1].to_string(),
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(1);
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<width$}", cell, width = width))
                .collect();
            writeln!(f, "[{}]", cells.join("|"))?;
        }
        Ok(())
    }
}
