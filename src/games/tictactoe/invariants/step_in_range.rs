//! Step range invariant: the current step always names a snapshot.

use super::super::Engine;
use super::Invariant;

/// Invariant: `0 <= step <= history.len() - 1`.
pub struct StepInRangeInvariant;

impl Invariant<Engine> for StepInRangeInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.step < engine.history.len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_holds_after_jump() {
        let mut engine = Engine::replay(&[Position::Center, Position::TopLeft]).unwrap();
        engine.jump_to(0).unwrap();
        assert!(StepInRangeInvariant::holds(&engine));
        assert!(engine.jump_to(5).is_err());
        assert!(StepInRangeInvariant::holds(&engine));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut engine = Engine::new();
        engine.step = 3;
        assert!(!StepInRangeInvariant::holds(&engine));
    }
}
