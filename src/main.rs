use anyhow::{Context, Result};
use chessmatch::cli::{App, Cli, Commands, Config, ConfigCommand, GameOutcome, PieceStyle};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn config_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    match cli_path {
        Some(path) => Ok(path),
        None => Config::default_config_file(),
    }
}

fn main() -> Result<()> {
    // stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = config_path(cli.config)?;

    match cli.command.unwrap_or(Commands::Play {
        ascii: false,
        no_color: false,
    }) {
        Commands::Play { ascii, no_color } => {
            let mut config =
                Config::load_or_create(&path).context("Failed to initialize configuration")?;
            if ascii {
                config.piece_style = PieceStyle::Ascii;
            }
            if no_color {
                config.use_color = false;
            }

            let mut app = App::new(config);
            let outcome = app.run(io::stdin().lock(), io::stdout().lock())?;
            match outcome {
                GameOutcome::Checkmate { winner } => info!("{} won by checkmate", winner),
                GameOutcome::Abandoned => info!("Match abandoned"),
            }
        }
        Commands::Config { command } => match command {
            ConfigCommand::Path => {
                println!("{}", path.display());
            }
            ConfigCommand::Show => {
                let config = Config::load_or_create(&path)?;
                let content =
                    toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
                println!("{}", content);
            }
            ConfigCommand::Reset => {
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
            }
        },
    }

    Ok(())
}
