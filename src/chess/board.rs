use super::error::BoardError;
use super::piece::{Color, Piece, PieceType};
use super::position::{Position, BOARD_SIZE};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Fixed-size grid of optional pieces.
///
/// The board knows nothing about chess rules; it only guarantees that a
/// square holds at most one piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Row-major storage, `squares[row * columns + column]`
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < 1 || columns < 1 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            squares: vec![None; rows * columns],
        })
    }

    /// Empty 8x8 board
    pub fn standard() -> Self {
        let size = BOARD_SIZE as usize;
        Self {
            rows: size,
            columns: size,
            squares: vec![None; size * size],
        }
    }

    /// 8x8 board with the standard starting position.
    /// Black occupies rows 0-1 (ranks 8-7), White rows 6-7 (ranks 2-1).
    pub fn starting_position() -> Self {
        let mut board = Self::standard();
        let columns = board.columns;

        for (column, &piece_type) in BACK_RANK.iter().enumerate() {
            board.squares[column] = Some(Piece::new(piece_type, Color::Black));
            board.squares[columns + column] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.squares[6 * columns + column] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.squares[7 * columns + column] = Some(Piece::new(piece_type, Color::White));
        }

        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Bounds check
    pub fn position_exists(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && (position.row as usize) < self.rows
            && (position.column as usize) < self.columns
    }

    fn index(&self, position: Position) -> Result<usize, BoardError> {
        if !self.position_exists(position) {
            return Err(BoardError::OutOfBounds(position));
        }
        Ok(position.row as usize * self.columns + position.column as usize)
    }

    /// Get the piece at the specified position, if any
    ///
    /// Off-board positions simply hold nothing.
    pub fn piece(&self, position: Position) -> Option<&Piece> {
        let index = self.index(position).ok()?;
        self.squares[index].as_ref()
    }

    pub fn there_is_a_piece(&self, position: Position) -> Result<bool, BoardError> {
        let index = self.index(position)?;
        Ok(self.squares[index].is_some())
    }

    /// Put a piece on an empty square
    pub fn place_piece(&mut self, piece: Piece, position: Position) -> Result<(), BoardError> {
        let index = self.index(position)?;
        if self.squares[index].is_some() {
            return Err(BoardError::SquareOccupied(position));
        }

        self.squares[index] = Some(piece);
        Ok(())
    }

    /// Detach and return whatever stands on the square
    pub fn remove_piece(&mut self, position: Position) -> Result<Option<Piece>, BoardError> {
        let index = self.index(position)?;
        Ok(self.squares[index].take())
    }

    /// Every occupied square, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        let columns = self.columns;
        self.squares.iter().enumerate().filter_map(move |(index, square)| {
            square.as_ref().map(|piece| {
                (
                    Position::new((index / columns) as i32, (index % columns) as i32),
                    piece,
                )
            })
        })
    }

    /// Copy of the grid as `rows x columns` nested vectors, for rendering
    pub fn to_grid(&self) -> Vec<Vec<Option<Piece>>> {
        self.squares
            .chunks(self.columns)
            .map(|row| row.to_vec())
            .collect()
    }
}
