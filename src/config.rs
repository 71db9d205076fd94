//! Application configuration.
//!
//! Everything here is cosmetic or bookkeeping: the window title, size and
//! resizability, who moves first, and where logs go. None of it changes the
//! rules of the game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Window dimensions in terminal cells, written as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("{}x{}", width, height)]
#[serde(try_from = "String", into = "String")]
pub struct WindowSize {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl WindowSize {
    /// Creates a new window size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(40, 17)
    }
}

impl FromStr for WindowSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let (width, height) = lowered
            .split_once('x')
            .ok_or_else(|| ConfigError::new(format!("Window size '{}' is not WIDTHxHEIGHT", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u16>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::new(format!("Invalid window dimension '{}' in '{}'", part, s)))
        };

        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

impl TryFrom<String> for WindowSize {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowSize> for String {
    fn from(size: WindowSize) -> Self {
        size.to_string()
    }
}

/// Cosmetic window settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown on the window border.
    title: String,

    /// Window size used when the window is not resizable.
    size: WindowSize,

    /// Whether the window follows the terminal size.
    resizable: bool,
}

impl WindowConfig {
    /// Creates a window configuration.
    pub fn new(title: impl Into<String>, size: WindowSize, resizable: bool) -> Self {
        Self {
            title: title.into(),
            size,
            resizable,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Tic-Tac Toe", WindowSize::default(), false)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Player who makes the first move.
    first_player: Player,

    /// File receiving tracing output (the terminal is taken by the UI).
    log_file: PathBuf,

    /// Window settings.
    window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            log_file: PathBuf::from("tictactoe.log"),
            window: WindowConfig::default(),
        }
    }
}

/// Values supplied on the command line; each one replaces the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Window title.
    pub title: Option<String>,
    /// Window size.
    pub size: Option<WindowSize>,
    /// Window resizability.
    pub resizable: Option<bool>,
    /// First player.
    pub first_player: Option<Player>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(title = %config.window.title, first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(title) = overrides.title {
            self.window.title = title;
        }
        if let Some(size) = overrides.size {
            self.window.size = size;
        }
        if let Some(resizable) = overrides.resizable {
            self.window.resizable = resizable;
        }
        if let Some(first_player) = overrides.first_player {
            self.first_player = first_player;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
