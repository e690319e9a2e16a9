//! Tests for board positions and snapshots.

use tictactoe_classic::{Board, Mark, Position, Square, check_winner, is_draw, next_mark};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));

    let free = board.empty_positions();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Position::TopLeft));
    assert!(!free.contains(&Position::Center));
    assert!(free.contains(&Position::BottomRight));
}

#[test]
fn test_snapshots_are_independent() {
    let first = Board::new().with_mark(Position::TopLeft, Mark::X);
    let second = first.with_mark(Position::Center, Mark::O);

    assert_eq!(first.occupied(), 1);
    assert_eq!(second.occupied(), 2);
    assert_eq!(first.diff(&second), vec![Position::Center]);
    assert_eq!(next_mark(&second), Mark::X);
}

#[test]
fn test_degenerate_board_reports_first_line() {
    // Not reachable in play: both the middle row and middle column are O.
    let mut board = Board::new();
    for pos in [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::TopCenter,
        Position::BottomCenter,
    ] {
        board.set(pos, Square::Occupied(Mark::O));
    }
    let win = check_winner(&board).expect("two lines complete");
    assert_eq!(win.indices(), [3, 4, 5]);
    assert!(!is_draw(&board));
}
