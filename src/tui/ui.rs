//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{GameView, Mark, Position, Square};

const HELP: &str = "Arrows/Enter or 1-9: play | [ ]: step | Home/End | R: restart | Q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("TicTacToe Classic")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if *app.config().show_move_list() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(24)])
            .split(chunks[1]);
        draw_board(frame, body[0], app, &view);
        draw_moves(frame, body[1], &view);
    } else {
        draw_board(frame, chunks[1], app, &view);
    }

    let status_text = match app.feedback() {
        Some(feedback) => format!("{} ({})", view.status_text(), feedback),
        None => view.status_text(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, view, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, area, app, view, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, pos: Position) {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if *app.config().highlight_winning_line() && view.is_highlighted(pos) {
        base_style.bg(Color::LightRed).fg(Color::White)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let lines: Vec<Line> = view
        .steps()
        .iter()
        .map(|step| {
            if *step.is_current() {
                Line::from(Span::styled(
                    format!("> {}", step.label()),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(format!("  {}", step.label())))
            }
        })
        .collect();

    // Keep the current entry visible when the list is taller than the panel.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (view.step() + 1).saturating_sub(visible) as u16;

    let moves = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(moves, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn play(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_frame() {
        let app = App::new(TuiConfig::default());
        let screen = text(&render(&app));
        assert!(screen.contains("TicTacToe Classic"));
        assert!(screen.contains("Next Player: X"));
        assert!(screen.contains("> Go to game start"));
    }

    #[test]
    fn test_win_frame_shows_winner_and_moves() {
        let mut app = App::new(TuiConfig::default());
        play(&mut app, "15243");
        let screen = text(&render(&app));
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("> Go to move #5"));
        assert!(screen.contains("  Go to move #4"));
    }

    #[test]
    fn test_move_list_hidden_by_config() {
        let app = App::new(TuiConfig::default().with_move_list(false));
        let screen = text(&render(&app));
        assert!(!screen.contains("Go to game start"));
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let mut app = App::new(TuiConfig::default());
        play(&mut app, "15243");
        let buffer = render(&app);
        let highlighted = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::LightRed)
            .count();
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_feedback_shown_in_status() {
        let mut app = App::new(TuiConfig::default());
        play(&mut app, "55");
        let screen = text(&render(&app));
        assert!(screen.contains("already occupied"));
    }
}
