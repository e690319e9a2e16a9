//! Moves and command errors for tic-tac-toe.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
///
/// History stores boards, not moves; a `Move` is recovered from the
/// difference between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a `play` command was rejected.
///
/// A rejected command never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The raw cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Reason a `jump_to` command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step is past the end of history.
    #[display("Step {} is out of range (last step is {})", step, last)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// Last valid step.
        last: usize,
    },
}
