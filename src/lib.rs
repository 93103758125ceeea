pub mod chess;
pub mod cli;

// Re-export key types for easy testing
pub use chess::{ChessError, ChessMatch, ChessPosition, Color, MatchState, Piece, PieceType};
