//! Contract-based validation for engine commands.
//!
//! Contracts formalize Hoare-style reasoning: {P} command {Q}.
//! Preconditions gate every `play`; postconditions are checked in
//! debug builds after the engine has mutated.

use super::action::MoveError;
use super::engine::Engine;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why a precondition failed.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the current board has no completed line.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `MoveError::GameOver` once a line is complete.
    #[instrument(level = "trace", skip(engine))]
    pub fn check(engine: &Engine) -> Result<(), MoveError> {
        if rules::check_winner(engine.current_board()).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `MoveError::SquareOccupied` for a taken square.
    #[instrument(level = "trace", skip(engine))]
    pub fn check(pos: Position, engine: &Engine) -> Result<(), MoveError> {
        if engine.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for `play`.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(pos: Position, engine: &Engine) -> Result<(), MoveError> {
        GameNotOver::check(engine)?;
        SquareIsEmpty::check(pos, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for the `play` command.
///
/// Preconditions:
/// - current board has no winner
/// - target square is empty
///
/// Postconditions:
/// - all history invariants hold
/// - history was cut at the old step and grew by one
/// - the new step is the last snapshot
pub struct PlayContract;

impl Contract<Engine, Position> for PlayContract {
    type Error = MoveError;

    fn pre(engine: &Engine, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, engine)
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        let expected_len = before.step() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History not truncated at branch point"
            );
            violations.push(InvariantViolation::new(
                "History is truncated after the current step before appending",
            ));
        }

        if after.step() != after.latest_step() {
            violations.push(InvariantViolation::new(
                "Current step advances to the new last snapshot",
            ));
        }

        if after.history().get(..=before.step()) != before.history().get(..=before.step()) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the current step are never altered",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
