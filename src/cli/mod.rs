pub mod app;
pub mod commands;
pub mod display;
pub mod input;

pub use app::{App, Config, GameOutcome};
pub use commands::{Cli, Commands, ConfigCommand};
pub use display::{
    render_board, render_captured_pieces, render_error, render_match, render_status,
    DisplayOptions, PieceStyle,
};
pub use input::{InputError, InputResult, SourceInput};
