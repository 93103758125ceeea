use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chessmatch")]
#[command(about = "Two-player chess in the terminal")]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a match at this terminal (the default)
    ///
    /// At each prompt enter a square such as e2, or a whole move such as
    /// e2e4. Type 'quit' to leave the match.
    ///
    /// Examples:
    ///   chessmatch play
    ///   chessmatch play --ascii --no-color
    Play {
        /// Draw pieces as letters instead of Unicode glyphs
        #[arg(long)]
        ascii: bool,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Overwrite the configuration file with defaults
    Reset,
}
