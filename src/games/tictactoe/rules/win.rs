//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in canonical order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three cells it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct WinResult {
    /// The mark that completed the line.
    mark: Mark,
    /// The winning cells, in line order.
    line: [Position; 3],
}

impl WinResult {
    /// Creates a win result.
    pub fn new(mark: Mark, line: [Position; 3]) -> Self {
        Self { mark, line }
    }

    /// Checks whether `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// Winning cells as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`LINES`] order, or `None`.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinResult::new(mark, [a, b, c]))
            }
            _ => None,
        }
    })
}
