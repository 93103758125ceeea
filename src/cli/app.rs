use crate::chess::{ChessMatch, ChessPosition, Color};
use crate::cli::display::{
    render_board, render_error, render_match, DisplayOptions, PieceStyle, CLEAR_SCREEN,
};
use crate::cli::input::{self, InputError, InputResult, SourceInput};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unicode glyphs or letters
    pub piece_style: PieceStyle,
    /// ANSI colors for pieces, labels and highlights
    pub use_color: bool,
    /// Show the board with move hints after a source square is chosen
    pub highlight_moves: bool,
    /// Only highlight moves that don't leave the king in check
    pub legal_hints_only: bool,
    /// Clear the terminal before drawing each frame
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            piece_style: PieceStyle::Unicode,
            use_color: true,
            highlight_moves: true,
            legal_hints_only: false,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("dev", "chessmatch", "chessmatch")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there first if it doesn't exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content).context("Failed to write configuration file")?;

        Ok(())
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            piece_style: self.piece_style,
            use_color: self.use_color,
        }
    }
}

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    /// The player quit or input ran out before the match was decided
    Abandoned,
}

enum TurnFlow {
    Continue,
    Quit,
}

/// Console front end: reads moves, feeds them to the match, draws the result
pub struct App {
    pub config: Config,
    chess_match: ChessMatch,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_match(config, ChessMatch::new())
    }

    /// Start from an already prepared match
    pub fn with_match(config: Config, chess_match: ChessMatch) -> Self {
        Self {
            config,
            chess_match,
        }
    }

    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }

    /// Play until checkmate, `quit`, or end of input.
    ///
    /// Rejected moves are explained and the prompt repeats. Internal engine
    /// failures abort the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<GameOutcome> {
        info!("Match started");

        while !self.chess_match.checkmate() {
            self.draw_frame(&mut output)?;
            write!(output, "\nSource: ")?;
            output.flush()?;

            let flow = input::read_line(&mut input)
                .and_then(|line| self.play_turn(&line, &mut input, &mut output));

            match flow {
                Ok(TurnFlow::Continue) => {}
                Ok(TurnFlow::Quit) | Err(InputError::EndOfInput) => {
                    info!("Match abandoned on turn {}", self.chess_match.turn());
                    return Ok(GameOutcome::Abandoned);
                }
                Err(InputError::Chess(e)) if e.is_rule_violation() => {
                    writeln!(output, "{}", render_error(&e))?;
                    writeln!(output, "Press Enter to continue")?;
                    output.flush()?;
                    if let Err(InputError::EndOfInput) = input::read_line(&mut input) {
                        return Ok(GameOutcome::Abandoned);
                    }
                }
                Err(e) => return Err(anyhow::Error::new(e).context("Match aborted")),
            }
        }

        self.draw_frame(&mut output)?;
        let winner = self.chess_match.current_player();
        info!("Match finished, {} wins on turn {}", winner, self.chess_match.turn());
        Ok(GameOutcome::Checkmate { winner })
    }

    fn draw_frame<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        if self.config.clear_screen {
            write!(output, "{CLEAR_SCREEN}")?;
        }
        write!(
            output,
            "{}",
            render_match(&self.chess_match, &self.config.display_options())
        )
    }

    fn play_turn<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> InputResult<TurnFlow> {
        match input::parse_source_input(line)? {
            SourceInput::Quit => Ok(TurnFlow::Quit),
            SourceInput::Move(mv) => self.perform(mv.from, mv.to, input, output),
            SourceInput::Square(source) => {
                let moves = if self.config.legal_hints_only {
                    self.chess_match.legal_moves(source)?
                } else {
                    self.chess_match.possible_moves(source)?
                };

                if self.config.highlight_moves {
                    if self.config.clear_screen {
                        write!(output, "{CLEAR_SCREEN}")?;
                    }
                    write!(
                        output,
                        "{}",
                        render_board(
                            &self.chess_match.pieces(),
                            Some(&moves),
                            &self.config.display_options()
                        )
                    )?;
                }

                write!(output, "\nTarget: ")?;
                output.flush()?;
                let target = input::read_chess_position(input)?;
                self.perform(source, target, input, output)
            }
        }
    }

    fn perform<R: BufRead, W: Write>(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
        input: &mut R,
        output: &mut W,
    ) -> InputResult<TurnFlow> {
        if let Some(captured) = self.chess_match.perform_chess_move(source, target)? {
            debug!("{}{} captured {:?}", source, target, captured);
        }

        if self.chess_match.promoted().is_some() {
            loop {
                write!(output, "Enter piece for promotion (B/N/R/Q): ")?;
                output.flush()?;
                let code = input::read_line(input)?;
                if input::is_promotion_code(&code) {
                    self.chess_match.replace_promoted_piece(&code.to_uppercase())?;
                    break;
                }
                writeln!(output, "Invalid value! Please enter B, N, R or Q.")?;
            }
        }

        Ok(TurnFlow::Continue)
    }
}
