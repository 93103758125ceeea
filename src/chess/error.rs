use super::piece::Color;
use super::position::{ChessPosition, Position};
use thiserror::Error;

/// Failures of the raw board primitives.
///
/// These never come from a bad move choice; the match only reaches them when
/// its own bookkeeping is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board must have at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Position {0} is not on the board")]
    OutOfBounds(Position),

    #[error("There is already a piece on position {0}")]
    SquareOccupied(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid piece type: {0}")]
    InvalidPieceType(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("There is no piece on source position {0}")]
    NoPiece(ChessPosition),

    #[error("The piece on {position} is not yours, it belongs to {owner}")]
    NotYourPiece { position: ChessPosition, owner: Color },

    #[error("There are no possible moves for the piece on {0}")]
    NoPossibleMoves(ChessPosition),

    #[error("The piece on {from} can't move to {to}")]
    IllegalTarget {
        from: ChessPosition,
        to: ChessPosition,
    },

    #[error("Illegal castling: {0}")]
    IllegalCastling(String),

    #[error("You can't put yourself in check")]
    SelfCheck,

    #[error("The match is over, no further moves are accepted")]
    MatchOver,

    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("There is no {0} king on the board")]
    MissingKing(Color),

    #[error("Inconsistent match state: {0}")]
    InconsistentState(String),

    #[error("There is no piece to be promoted")]
    NoPendingPromotion,
}

impl ChessError {
    /// True for errors caused by the caller's move choice or input.
    ///
    /// Rule violations leave the match untouched and the caller may retry.
    /// Everything else signals a broken invariant inside the engine.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            ChessError::InvalidPosition(_)
                | ChessError::InvalidPieceType(_)
                | ChessError::InvalidColor(_)
                | ChessError::NoPiece(_)
                | ChessError::NotYourPiece { .. }
                | ChessError::NoPossibleMoves(_)
                | ChessError::IllegalTarget { .. }
                | ChessError::IllegalCastling(_)
                | ChessError::SelfCheck
                | ChessError::MatchOver
        )
    }
}
