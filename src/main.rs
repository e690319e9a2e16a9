//! TicTacToe Classic - CLI
//!
//! Interactive terminal play or headless replay of a move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_classic::{Engine, TuiConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, step, json } => run_replay(moves, step, json),
    }
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = TuiConfig::load(config_path.as_deref())?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            config.log_file().display()
        )
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tictactoe_classic::run_tui(config)
}

/// Play `moves` from an empty board and print the outcome.
///
/// Rejected moves are reported and skipped, as the UI would ignore them.
fn run_replay(moves: Vec<usize>, step: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut engine = Engine::new();
    for (n, index) in moves.iter().enumerate() {
        if let Err(e) = engine.play_index(*index) {
            warn!(move_number = n + 1, index, error = %e, "Move ignored");
            eprintln!("move {} ({}): ignored, {}", n + 1, index, e);
        }
    }

    if let Some(step) = step {
        engine.jump_to(step)?;
    }

    info!(step = engine.step(), status = %engine.status(), "Replay finished");

    let view = engine.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}\n", view.board());
        println!("{}", view.status_text());
        if let Some(line) = view.winning_line() {
            let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
            println!("Winning line: {}", cells.join(", "));
        }
        println!("Step {} of {}", engine.step(), engine.latest_step());
    }

    Ok(())
}
