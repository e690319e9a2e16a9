//! Classic two-player tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, PlayContract, SquareIsEmpty};
pub use engine::Engine;
pub use invariants::{
    AlternatingMarkInvariant, EmptyStartInvariant, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleCellTransitionInvariant, StepInRangeInvariant,
};
pub use position::Position;
pub use rules::{GameStatus, LINES, WinResult, check_winner, evaluate, is_draw, is_full, next_mark};
pub use types::{Board, Mark, Square};
pub use view::{GameView, StepDescriptor};
