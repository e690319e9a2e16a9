//! Keyboard input mapping.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A user gesture, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Jump to the empty board.
    JumpStart,
    /// Jump to the last recorded move.
    JumpLatest,
    /// Leave the application.
    Quit,
}

/// Decodes a key event. Releases and unbound keys yield `None`.
pub fn action_for_key(key: KeyEvent) -> Option<AppAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(AppAction::MoveCursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => Position::from_key(c).map(AppAction::Play),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppAction::Restart),
        KeyCode::Char('[') | KeyCode::PageUp => Some(AppAction::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(AppAction::StepForward),
        KeyCode::Home => Some(AppAction::JumpStart),
        KeyCode::End => Some(AppAction::JumpLatest),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use Position::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_move_cursor_inside_board() {
        assert_eq!(move_cursor(Center, KeyCode::Up), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(Center, KeyCode::Left), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Right), MiddleRight);
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(MiddleRight, KeyCode::Right), MiddleRight);
        assert_eq!(move_cursor(Center, KeyCode::Tab), Center);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(press(KeyCode::Char('1'))), Some(AppAction::Play(TopLeft)));
        assert_eq!(action_for_key(press(KeyCode::Char('9'))), Some(AppAction::Play(BottomRight)));
        assert_eq!(action_for_key(press(KeyCode::Enter)), Some(AppAction::PlayCursor));
        assert_eq!(action_for_key(press(KeyCode::Char('r'))), Some(AppAction::Restart));
        assert_eq!(action_for_key(press(KeyCode::Char('['))), Some(AppAction::StepBack));
        assert_eq!(action_for_key(press(KeyCode::PageDown)), Some(AppAction::StepForward));
        assert_eq!(action_for_key(press(KeyCode::Home)), Some(AppAction::JumpStart));
        assert_eq!(action_for_key(press(KeyCode::End)), Some(AppAction::JumpLatest));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(AppAction::Quit));
        assert_eq!(action_for_key(press(KeyCode::Char('0'))), None);
        assert_eq!(action_for_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(key), None);
    }
}
