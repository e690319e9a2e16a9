//! Single cell transition invariant: each move fills exactly one empty square.

use super::super::{Engine, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, and
/// that square goes from empty to occupied.
///
/// This is also what keeps earlier snapshots from being rewritten by
/// later moves.
pub struct SingleCellTransitionInvariant;

impl Invariant<Engine> for SingleCellTransitionInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            match changed.as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, Position};

    #[test]
    fn test_holds_for_played_game() {
        let engine = Engine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(SingleCellTransitionInvariant::holds(&engine));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let mut engine = Engine::new();
        engine.history.push(
            Board::new()
                .with_mark(Position::TopLeft, Mark::X)
                .with_mark(Position::Center, Mark::O),
        );
        assert!(!SingleCellTransitionInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = Engine::replay(&[Position::Center]).unwrap();
        engine
            .history
            .push(Board::new().with_mark(Position::Center, Mark::O));
        assert!(!SingleCellTransitionInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut engine = Engine::new();
        engine.history.push(Board::new());
        assert!(!SingleCellTransitionInvariant::holds(&engine));
    }
}
