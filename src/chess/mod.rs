// Re-export all public items
pub use self::board::Board;
pub use self::chess_match::{ChessMatch, MatchState};
pub use self::error::{BoardError, ChessError};
pub use self::moves::{Move, MoveMatrix};
pub use self::piece::{Color, Piece, PieceType};
pub use self::position::{ChessPosition, Position, BOARD_SIZE};

// Define submodules
mod board;
mod chess_match;
mod error;
pub mod movegen;
mod moves;
mod piece;
mod position;
