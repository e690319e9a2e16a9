//! Alternating mark invariant: X, O, X, O, ...

use super::super::{Engine, Mark};
use super::Invariant;

/// Invariant: move number m (1-based) places X when m is odd and O when
/// m is even.
pub struct AlternatingMarkInvariant;

impl Invariant<Engine> for AlternatingMarkInvariant {
    fn holds(engine: &Engine) -> bool {
        (1..engine.history().len()).all(|step| {
            engine
                .move_at(step)
                .is_some_and(|mov| mov.mark == Mark::for_move(step))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
