//! Configuration for the terminal front-end.
//!
//! The game engine itself takes no configuration; these settings only
//! affect logging and what the terminal UI shows.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_classic.toml";

/// Settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the TUI writes its log to (the screen belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the move list next to the board.
    #[serde(default = "default_true")]
    show_move_list: bool,

    /// Highlight the winning line once a game is won.
    #[serde(default = "default_true")]
    highlight_winning_line: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_classic.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_move_list: true,
            highlight_winning_line: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read if present, otherwise defaults are used.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns a copy with the move list shown or hidden.
    pub fn with_move_list(mut self, show: bool) -> Self {
        self.show_move_list = show;
        self
    }

    /// Returns a copy with winning-line highlighting on or off.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight_winning_line = highlight;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_classic.log"));
        assert_eq!(config.log_filter(), "info");
        assert!(*config.show_move_list());
        assert!(*config.highlight_winning_line());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TuiConfig::from_toml("show_move_list = false\n").unwrap();
        assert!(!*config.show_move_list());
        assert!(*config.highlight_winning_line());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_file = \"game.log\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        writeln!(file, "highlight_winning_line = false").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
        assert_eq!(config.log_filter(), "debug");
        assert!(!*config.highlight_winning_line());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = TuiConfig::from_toml("show_move_list = \"yes\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
