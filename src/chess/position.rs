use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on a standard chess board
pub const BOARD_SIZE: i32 = 8;

/// Zero-based grid coordinate. Row 0 is rank 8, column 0 is file a.
///
/// Coordinates are signed so move generation can step off the edge and ask
/// the board whether the result still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Position shifted by the given row and column deltas
    pub const fn offset(&self, rows: i32, columns: i32) -> Self {
        Self {
            row: self.row + rows,
            column: self.column + columns,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Algebraic square name such as `e2`: a column letter and a row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPosition {
    column: char,
    row: u8,
}

impl ChessPosition {
    pub fn new(column: char, row: u8) -> Result<Self, ChessError> {
        let column = column.to_ascii_lowercase();
        if !('a'..='h').contains(&column) || !(1..=8).contains(&row) {
            return Err(ChessError::InvalidPosition(format!(
                "Error instantiating ChessPosition '{}{}'. Valid values are from a1 to h8.",
                column, row
            )));
        }
        Ok(Self { column, row })
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Grid coordinate: `row = 8 - row number`, `column = letter - 'a'`
    pub fn to_position(&self) -> Position {
        Position::new(
            BOARD_SIZE - i32::from(self.row),
            i32::from(self.column as u8 - b'a'),
        )
    }

    pub fn from_position(position: Position) -> Result<Self, ChessError> {
        let Position { row, column } = position;
        if !(0..BOARD_SIZE).contains(&row) || !(0..BOARD_SIZE).contains(&column) {
            return Err(ChessError::InvalidPosition(format!(
                "Position {} has no algebraic name",
                position
            )));
        }
        Ok(Self {
            column: (b'a' + column as u8) as char,
            row: (BOARD_SIZE - row) as u8,
        })
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for ChessPosition {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidPosition(format!(
                "Error reading ChessPosition '{}'. Valid values are from a1 to h8.",
                s
            )));
        };

        let row = row.to_digit(10).ok_or_else(|| {
            ChessError::InvalidPosition(format!(
                "Error reading ChessPosition '{}'. Valid values are from a1 to h8.",
                s
            ))
        })?;

        Self::new(column, row as u8)
    }
}

impl TryFrom<Position> for ChessPosition {
    type Error = ChessError;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        Self::from_position(position)
    }
}

impl From<ChessPosition> for Position {
    fn from(position: ChessPosition) -> Self {
        position.to_position()
    }
}
