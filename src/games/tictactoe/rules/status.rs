//! Status classification for a single board.

use super::super::{Board, Mark};
use super::win::{WinResult, check_winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of one board snapshot.
///
/// Always derived from the board; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed and empty squares remain.
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A line has been completed.
    Won(WinResult),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The win, if any.
    pub fn win(&self) -> Option<&WinResult> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.win().map(|win| *win.mark())
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next Player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.mark()),
            GameStatus::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Mark whose turn it is on `board`, from the parity of placed marks.
pub fn next_mark(board: &Board) -> Mark {
    if board.occupied() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

/// Classifies a board as in progress, won or drawn.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(win) = check_winner(board) {
        GameStatus::Won(win)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: next_mark(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    #[test]
    fn test_empty_board_is_x_to_move() {
        assert_eq!(
            evaluate(&Board::new()),
            GameStatus::InProgress { next: Mark::X }
        );
    }

    #[test]
    fn test_next_mark_follows_parity() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(next_mark(&board), Mark::O);
        let board = board.with_mark(Position::TopLeft, Mark::O);
        assert_eq!(next_mark(&board), Mark::X);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            GameStatus::InProgress { next: Mark::O }.to_string(),
            "Next Player: O"
        );
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw!");
        let win = WinResult::new(Mark::X, [Position::TopLeft, Position::Center, Position::BottomRight]);
        assert_eq!(GameStatus::Won(win).to_string(), "Winner: X");
        assert_eq!(GameStatus::Won(win).winner(), Some(Mark::X));
        assert!(GameStatus::Draw.is_over());
    }
}
