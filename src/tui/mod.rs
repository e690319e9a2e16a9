//! Terminal UI for TicTacToe Classic.
//!
//! A thin presentation layer: it renders [`Engine::view`] and forwards
//! key presses to the engine. The loop is synchronous; every gesture is
//! handled to completion before the next key is read.
//!
//! [`Engine::view`]: crate::games::tictactoe::Engine::view

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{AppAction, action_for_key, move_cursor};
pub use ui::draw;

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including errors from
/// the event loop.
#[instrument(skip(config))]
pub fn run(config: TuiConfig) -> Result<()> {
    info!("Starting TicTacToe Classic TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(e).context("Failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            disable_raw_mode().ok();
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.engine().latest_step(), "TUI exited");
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &*app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
