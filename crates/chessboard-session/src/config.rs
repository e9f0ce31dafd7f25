//! Board configuration.
//!
//! The host page may pass a TOML document; every field has a default, so an
//! empty document (or none at all) yields the plain two-player board.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Presentation and flow options for a board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Heading shown above the board.
    #[serde(default = "default_title")]
    pub title: String,
    /// Collect both players' names before the first move.
    #[serde(default)]
    pub require_player_names: bool,
    /// Show the captured-piece trays.
    #[serde(default = "default_true")]
    pub show_captures: bool,
    /// Outline the two squares of the most recent move.
    #[serde(default = "default_true")]
    pub highlight_last_move: bool,
    /// Text shown in an empty capture tray.
    #[serde(default = "default_empty_tray_placeholder")]
    pub empty_tray_placeholder: String,
}

fn default_title() -> String {
    "Chess".to_string()
}

fn default_true() -> bool {
    true
}

fn default_empty_tray_placeholder() -> String {
    "No captures yet".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            title: default_title(),
            require_player_names: false,
            show_captures: true,
            highlight_last_move: true,
            empty_tray_placeholder: default_empty_tray_placeholder(),
        }
    }
}

impl BoardConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }
}
