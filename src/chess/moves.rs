use super::error::ChessError;
use super::position::{ChessPosition, Position};
use std::fmt;
use std::str::FromStr;

/// A source/target pair in algebraic notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: ChessPosition,
    pub to: ChessPosition,
}

impl Move {
    pub fn new(from: ChessPosition, to: ChessPosition) -> Result<Self, ChessError> {
        if from == to {
            return Err(ChessError::InvalidPosition(
                "Source and destination positions cannot be the same".to_string(),
            ));
        }
        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

// Accepts "e2e4" and "e2 e4"
impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != 4 {
            return Err(ChessError::InvalidPosition(format!(
                "Invalid move format '{}'. Expected two squares such as 'e2e4'.",
                s.trim()
            )));
        }

        let from: String = squares[..2].iter().collect();
        let to: String = squares[2..].iter().collect();
        Self::new(from.parse()?, to.parse()?)
    }
}

/// Boolean grid marking every square a piece could move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMatrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, position: Position) -> Option<usize> {
        let in_bounds = position.row >= 0
            && position.column >= 0
            && (position.row as usize) < self.rows
            && (position.column as usize) < self.columns;
        in_bounds.then(|| position.row as usize * self.columns + position.column as usize)
    }

    /// Whether the square is marked; off-grid squares never are
    pub fn get(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.cells[index])
    }

    pub(crate) fn mark(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.cells[index] = true;
        }
    }

    pub(crate) fn clear(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.cells[index] = false;
        }
    }

    pub fn any(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Marked squares, row by row
    pub fn targets(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(index, _)| Position::new((index / columns) as i32, (index % columns) as i32))
    }
}
