//! Text rendering of a match.
//!
//! Every function here is pure: it takes the state to show and returns the
//! text, leaving printing to the caller.

use crate::chess::{ChessError, ChessMatch, Color, MoveMatrix, Piece, Position};
use serde::{Deserialize, Serialize};

pub const ANSI_RESET: &str = "\u{1b}[0m";
pub const ANSI_YELLOW: &str = "\u{1b}[33m";
pub const ANSI_WHITE: &str = "\u{1b}[37m";
pub const ANSI_RED: &str = "\u{1b}[31m";
pub const ANSI_BLUE_BACKGROUND: &str = "\u{1b}[44m";
pub const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

/// How pieces are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub piece_style: PieceStyle,
    pub use_color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            piece_style: PieceStyle::Unicode,
            use_color: true,
        }
    }
}

impl DisplayOptions {
    /// Letters, no escape codes
    pub fn plain() -> Self {
        Self {
            piece_style: PieceStyle::Ascii,
            use_color: false,
        }
    }
}

fn paint(text: &str, ansi: &str, options: &DisplayOptions) -> String {
    if options.use_color {
        format!("{ansi}{text}{ANSI_RESET}")
    } else {
        text.to_string()
    }
}

fn color_code(color: Color) -> &'static str {
    match color {
        Color::White => ANSI_WHITE,
        Color::Black => ANSI_YELLOW,
    }
}

fn glyph(piece: &Piece, style: PieceStyle) -> char {
    match style {
        PieceStyle::Unicode => piece.symbol(),
        PieceStyle::Ascii => piece.ascii_char(),
    }
}

fn render_square(piece: Option<&Piece>, highlighted: bool, options: &DisplayOptions) -> String {
    if options.use_color {
        let mut square = String::new();
        if highlighted {
            square.push_str(ANSI_BLUE_BACKGROUND);
        }
        match piece {
            Some(piece) => {
                square.push_str(color_code(piece.color));
                square.push(glyph(piece, options.piece_style));
            }
            None => square.push('-'),
        }
        square.push_str(ANSI_RESET);
        square.push(' ');
        return square;
    }

    match (piece, highlighted) {
        (Some(piece), true) => format!("{}*", glyph(piece, options.piece_style)),
        (Some(piece), false) => format!("{} ", glyph(piece, options.piece_style)),
        (None, true) => "+ ".to_string(),
        (None, false) => "- ".to_string(),
    }
}

/// Board grid with rank labels on the left and file letters underneath.
/// Squares marked in `possible_moves` are highlighted.
pub fn render_board(
    pieces: &[Vec<Option<Piece>>],
    possible_moves: Option<&MoveMatrix>,
    options: &DisplayOptions,
) -> String {
    let mut out = String::new();
    let rows = pieces.len();

    for (row, squares) in pieces.iter().enumerate() {
        out.push_str(&paint(&format!("{} ", rows - row), ANSI_YELLOW, options));
        for (column, square) in squares.iter().enumerate() {
            let highlighted = possible_moves
                .is_some_and(|moves| moves.get(Position::new(row as i32, column as i32)));
            out.push_str(&render_square(square.as_ref(), highlighted, options));
        }
        out.push('\n');
    }

    let columns = pieces.first().map_or(0, |squares| squares.len());
    let files: Vec<String> = (b'a'..)
        .take(columns)
        .map(|letter| (letter as char).to_string())
        .collect();
    out.push_str(&paint(&format!("  {}", files.join(" ")), ANSI_YELLOW, options));
    out.push('\n');
    out
}

/// Captured pieces grouped by color
pub fn render_captured_pieces(captured: &[Piece], options: &DisplayOptions) -> String {
    let list = |color: Color| {
        captured
            .iter()
            .filter(|piece| piece.color == color)
            .map(|piece| glyph(piece, options.piece_style).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "Captured pieces:\nWhite: {}\nBlack: {}\n",
        paint(&list(Color::White), ANSI_WHITE, options),
        paint(&list(Color::Black), ANSI_YELLOW, options)
    )
}

/// Turn banner, or the result once the match is decided
pub fn render_status(chess_match: &ChessMatch, options: &DisplayOptions) -> String {
    let player = chess_match.current_player();

    if chess_match.checkmate() {
        return format!(
            "{}\nWinner: {}\n",
            paint("CHECKMATE!", ANSI_RED, options),
            player
        );
    }

    let mut out = format!(
        "Turn: {}\nWaiting player: {}\n",
        chess_match.turn(),
        paint(&player.to_string(), color_code(player), options)
    );
    if chess_match.check() {
        out.push_str(&paint("CHECK!", ANSI_RED, options));
        out.push('\n');
    }
    out
}

/// Board, captured pieces and status
pub fn render_match(chess_match: &ChessMatch, options: &DisplayOptions) -> String {
    format!(
        "{}\n{}\n{}",
        render_board(&chess_match.pieces(), None, options),
        render_captured_pieces(chess_match.captured_pieces(), options),
        render_status(chess_match, options)
    )
}

/// User-facing explanation of a rejected move
pub fn render_error(error: &ChessError) -> String {
    let suggestion = match error {
        ChessError::InvalidPosition(_) => Some("Enter a square such as e2, from a1 to h8"),
        ChessError::NoPiece(_) | ChessError::NotYourPiece { .. } => {
            Some("Choose one of your own pieces")
        }
        ChessError::IllegalTarget { .. } => Some("Pick one of the highlighted squares"),
        ChessError::SelfCheck => Some("Protect your king first"),
        _ => None,
    };

    match suggestion {
        Some(suggestion) => format!("❌ {}\n   💡 Suggestion: {}", error, suggestion),
        None => format!("❌ {}", error),
    }
}
