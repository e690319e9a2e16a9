//! Command-line interface for tictactoe_classic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TicTacToe Classic - two-player tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_classic")]
#[command(about = "Classic two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a list of moves headlessly and print the result
    Replay {
        /// Comma-separated cell indices (0-8, row-major), e.g. "0,4,1,3,2"
        #[arg(value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// Jump to this step after playing the moves
        #[arg(long)]
        step: Option<usize>,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
