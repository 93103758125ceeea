use crate::chess::{ChessError, ChessPosition, Move};
use std::io::{self, BufRead};

/// Failure reading a line of player input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("Input ended")]
    EndOfInput,

    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;

/// What the player typed at the source prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceInput {
    /// A square to move from; the target is asked next
    Square(ChessPosition),
    /// Source and target in one go, e.g. `e2e4`
    Move(Move),
    Quit,
}

/// Next line, trimmed
pub fn read_line<R: BufRead>(input: &mut R) -> InputResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

/// Read a square such as `e2`
pub fn read_chess_position<R: BufRead>(input: &mut R) -> InputResult<ChessPosition> {
    Ok(read_line(input)?.parse::<ChessPosition>()?)
}

pub fn parse_source_input(line: &str) -> Result<SourceInput, ChessError> {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(SourceInput::Quit),
        _ => {}
    }

    if trimmed.chars().filter(|c| !c.is_whitespace()).count() == 4 {
        return Ok(SourceInput::Move(trimmed.parse()?));
    }

    Ok(SourceInput::Square(trimmed.parse()?))
}

/// Promotion codes the console accepts
pub fn is_promotion_code(code: &str) -> bool {
    matches!(code.trim().to_uppercase().as_str(), "B" | "N" | "R" | "Q")
}
