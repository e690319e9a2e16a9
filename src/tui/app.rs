//! Application state and logic.

use super::input::{self, AppAction};
use crate::config::TuiConfig;
use crate::games::tictactoe::{Engine, GameView, Position};
use crossterm::event::KeyEvent;
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the engine and a little UI state (cursor, feedback line). All
/// game decisions are left to the engine.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Position,
    feedback: Option<String>,
    config: TuiConfig,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: TuiConfig) -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::Center,
            feedback: None,
            config,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message about the last rejected gesture, if any.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current view of the game.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for_key(key) {
            self.apply(action);
        }
    }

    /// Applies a decoded gesture.
    #[instrument(skip(self), fields(step = self.engine.step()))]
    pub fn apply(&mut self, action: AppAction) {
        debug!("Handling action");
        self.feedback = None;

        match action {
            AppAction::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            AppAction::PlayCursor => self.play(self.cursor),
            AppAction::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            AppAction::Restart => self.engine.restart(),
            AppAction::StepBack => {
                if self.engine.can_step_back() {
                    self.jump(self.engine.step() - 1);
                }
            }
            AppAction::StepForward => {
                if self.engine.can_step_forward() {
                    self.jump(self.engine.step() + 1);
                }
            }
            AppAction::JumpStart => self.jump(0),
            AppAction::JumpLatest => self.jump(self.engine.latest_step()),
            AppAction::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.engine.play(pos) {
            debug!(error = %e, "Ignoring rejected move");
            self.feedback = Some(e.to_string());
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.engine.jump_to(step) {
            debug!(error = %e, "Ignoring rejected jump");
            self.feedback = Some(e.to_string());
        }
    }
}
