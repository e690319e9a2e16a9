//! TicTacToe Classic - two-player tic-tac-toe with time travel
//!
//! The heart of the crate is [`Engine`]: it records every board the game
//! has passed through, lets you jump back to any of them, and derives
//! turn, winner and draw from the board being looked at.
//!
//! # Architecture
//!
//! - **Engine**: history of board snapshots plus a current step
//! - **Rules**: pure win/draw evaluation of a single board
//! - **View**: read-only snapshot for rendering ([`GameView`])
//! - **TUI**: terminal front-end that forwards key presses to the engine
//!
//! # Example
//!
//! ```
//! use tictactoe_classic::{Engine, GameStatus, Mark, Position};
//!
//! let mut engine = Engine::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     engine.play(pos).unwrap();
//! }
//! assert_eq!(engine.next_mark(), Mark::O);
//!
//! // Go back one move and take a different branch.
//! engine.jump_to(2).unwrap();
//! engine.play(Position::BottomRight).unwrap();
//! assert_eq!(engine.history().len(), 4);
//! assert!(matches!(engine.status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingMarkInvariant, Board, Contract, EmptyStartInvariant, Engine, GameNotOver,
    GameStatus, GameView, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    JumpError, LINES, LegalMove, Mark, Move, MoveError, PlayContract, Position,
    SingleCellTransitionInvariant, SquareIsEmpty, Square, StepDescriptor, StepInRangeInvariant,
    WinResult, check_winner, evaluate, is_draw, is_full, next_mark,
};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, action_for_key, draw, move_cursor, run as run_tui};
