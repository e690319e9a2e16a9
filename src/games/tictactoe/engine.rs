//! Game engine for tic-tac-toe with move history and time travel.
//!
//! The engine stores exactly two things: the list of board snapshots and
//! the index of the current one. Turn, winner and draw are recomputed
//! from the current board on every query.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::rules::{self, GameStatus, WinResult};
use super::view::{GameView, StepDescriptor};
use super::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe engine.
///
/// Invariants:
/// - `history[0]` is the empty board
/// - consecutive snapshots differ in exactly one square, empty to occupied
/// - `step < history.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub(super) history: Vec<Board>,
    pub(super) step: usize,
}

impl Engine {
    /// Creates an engine holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Plays a sequence of moves from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for pos in moves {
            engine.play(*pos)?;
        }
        Ok(engine)
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `pos`.
    ///
    /// Any snapshots after the current step are discarded before the new
    /// board is appended, so playing after a jump starts a fresh branch.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the current board already has a winner
    /// - `MoveError::SquareOccupied` if `pos` is taken on the current board
    ///
    /// State is untouched when an error is returned.
    #[instrument(skip(self), fields(step = self.step, history_len = self.history.len()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if let Err(e) = PlayContract::pre(self, &pos) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.next_mark();
        let next = self.current_board().with_mark(pos, mark);

        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        debug!(%mark, step = self.step, discarded, "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = PlayContract::post(&before, self);
            if let Err(violations) = &post {
                tracing::error!(?violations, "Postcondition failed after move");
            }
            debug_assert!(post.is_ok(), "Engine invariants violated");
        }

        Ok(())
    }

    /// Places the next mark at a raw board index.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for an index outside 0-8, otherwise as [`Engine::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::try_from(index)?;
        self.play(pos)
    }

    /// Makes `step` the current snapshot. History is kept as is.
    ///
    /// # Errors
    ///
    /// `JumpError::OutOfRange` if `step` is past the last snapshot.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let last = self.latest_step();
        if step > last {
            debug!(last, "Jump rejected");
            return Err(JumpError::OutOfRange { step, last });
        }
        self.step = step;
        Ok(())
    }

    /// Resets to a single empty board at step 0.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history.clear();
        self.history.push(Board::new());
        self.step = 0;
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Index of the current snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the last recorded snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// All recorded snapshots, including any after the current step.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Mark that moves next. Even steps are X's turn.
    pub fn next_mark(&self) -> Mark {
        if self.step % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.current_board())
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::check_winner(self.current_board())
    }

    /// True when the current board is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// True when there is an earlier snapshot to jump to.
    pub fn can_step_back(&self) -> bool {
        self.step > 0
    }

    /// True when snapshots after the current step are preserved.
    pub fn can_step_forward(&self) -> bool {
        self.step < self.latest_step()
    }

    /// The move that produced snapshot `step` (`None` for step 0 or out of range).
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let prev = self.history.get(step.checked_sub(1)?)?;
        let board = self.history.get(step)?;
        let pos = *prev.diff(board).first()?;
        let mark = board.get(pos).mark()?;
        Some(Move::new(mark, pos))
    }

    /// Every recorded move, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.history.len())
            .filter_map(|step| self.move_at(step))
            .collect()
    }

    /// Snapshot of everything the presentation layer needs.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn view(&self) -> GameView {
        let status = self.status();
        let steps = (0..self.history.len())
            .map(|step| StepDescriptor::new(step, self.move_at(step), step == self.step))
            .collect();
        GameView::new(*self.current_board(), status, self.step, steps)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
