//! Empty start invariant: the first snapshot is the empty board.

use super::super::{Board, Engine};
use super::Invariant;

/// Invariant: `history[0]` is always the all-empty board.
pub struct EmptyStartInvariant;

impl Invariant<Engine> for EmptyStartInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_new_engine_holds() {
        assert!(EmptyStartInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_holds_after_restart() {
        let mut engine = Engine::replay(&[Position::Center]).unwrap();
        engine.restart();
        assert!(EmptyStartInvariant::holds(&engine));
    }

    #[test]
    fn test_corrupted_start_violates() {
        let mut engine = Engine::new();
        engine.history[0] = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!EmptyStartInvariant::holds(&engine));
    }
}
