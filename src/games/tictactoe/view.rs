//! Read-only view handed to the presentation layer.

use super::action::Move;
use super::rules::GameStatus;
use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StepDescriptor {
    /// History index this entry jumps to.
    step: usize,
    /// The move that produced this snapshot (`None` for the start).
    #[serde(rename = "move")]
    last_move: Option<Move>,
    /// True for the snapshot currently shown.
    is_current: bool,
}

impl StepDescriptor {
    /// Creates a step descriptor.
    pub fn new(step: usize, last_move: Option<Move>, is_current: bool) -> Self {
        Self {
            step,
            last_move,
            is_current,
        }
    }

    /// Button label for the move list.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

/// Everything needed to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Status of that board.
    status: GameStatus,
    /// Current step.
    step: usize,
    /// The move list.
    steps: Vec<StepDescriptor>,
}

impl GameView {
    /// Creates a view.
    pub fn new(board: Board, status: GameStatus, step: usize, steps: Vec<StepDescriptor>) -> Self {
        Self {
            board,
            status,
            step,
            steps,
        }
    }

    /// The three winning cells, if the board is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.status.win().map(|win| *win.line())
    }

    /// Whether `pos` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.status.win().is_some_and(|win| win.contains(pos))
    }

    /// Mark to move next, or `None` once the board is won or drawn.
    pub fn next_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::InProgress { next } => Some(next),
            _ => None,
        }
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Engine;
    use super::*;
    use Position::*;

    #[test]
    fn test_step_labels() {
        let engine = Engine::replay(&[Center, TopLeft]).unwrap();
        let view = engine.view();
        let labels: Vec<String> = view.steps().iter().map(StepDescriptor::label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_current_step_flagged() {
        let mut engine = Engine::replay(&[Center, TopLeft]).unwrap();
        engine.jump_to(1).unwrap();
        let view = engine.view();
        let current: Vec<usize> = view
            .steps()
            .iter()
            .filter(|s| *s.is_current())
            .map(|s| *s.step())
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(view.steps().len(), 3);
    }

    #[test]
    fn test_winning_line_highlight() {
        let engine = Engine::replay(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]).unwrap();
        let view = engine.view();
        assert_eq!(view.winning_line(), Some([TopLeft, TopCenter, TopRight]));
        assert!(view.is_highlighted(TopCenter));
        assert!(!view.is_highlighted(Center));
        assert_eq!(view.next_mark(), None);
        assert_eq!(view.status_text(), "Winner: X");
    }

    #[test]
    fn test_in_progress_view() {
        let view = Engine::replay(&[Center]).unwrap().view();
        assert_eq!(view.winning_line(), None);
        assert_eq!(view.next_mark(), Some(Mark::O));
        assert_eq!(view.status_text(), "Next Player: O");
    }

    #[test]
    fn test_view_serializes_to_json() {
        let view = Engine::replay(&[Center]).unwrap().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["step"], 1);
        assert_eq!(json["steps"][1]["move"]["mark"], "X");
        assert_eq!(json["steps"][1]["move"]["position"], "Center");
        assert_eq!(json["status"]["InProgress"]["next"], "O");
    }
}
