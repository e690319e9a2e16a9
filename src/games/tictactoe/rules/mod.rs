//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Nothing here
//! looks at history or turn state, so every snapshot can be evaluated
//! on its own.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{GameStatus, evaluate, next_mark};
pub use win::{LINES, WinResult, check_winner};
