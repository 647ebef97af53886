//! Game configuration from CLI flags and an optional TOML file.

use derive_more::{Display, Error};
use noughts::Marker;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::Cli;

fn default_marker() -> Marker {
    Marker::X
}

fn default_side() -> usize {
    3
}

/// Settings for one game.
///
/// Precedence is CLI flag over config file over default: human plays X
/// on a 3x3 board and moves first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Marker the human plays.
    #[serde(default = "default_marker")]
    pub marker: Marker,

    /// Board side length (3 or 4).
    #[serde(default = "default_side")]
    pub side: usize,

    /// Whether the computer makes the first move.
    #[serde(default)]
    pub computer_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            side: default_side(),
            computer_starts: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "config loaded");
        Ok(config)
    }

    /// Resolves the effective configuration for this run: the config
    /// file if present, with CLI flags overriding individual fields.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            Self::default()
        };

        if let Some(marker) = cli.marker {
            config.marker = marker;
        }
        if let Some(side) = cli.side {
            config.side = side as usize;
        }
        if cli.computer_starts {
            config.computer_starts = true;
        }
        Ok(config)
    }

    /// The marker that takes the first turn.
    pub fn starting_marker(&self) -> Marker {
        if self.computer_starts {
            self.marker.opponent()
        } else {
            self.marker
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
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
        let config = GameConfig::default();
        assert_eq!(config.marker, Marker::X);
        assert_eq!(config.side, 3);
        assert!(!config.computer_starts);
        assert_eq!(config.starting_marker(), Marker::X);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "marker = \"o\"\nside = 4\ncomputer_starts = true").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.marker, Marker::O);
        assert_eq!(config.side, 4);
        assert!(config.computer_starts);
        assert_eq!(config.starting_marker(), Marker::X);
    }

    #[test]
    fn test_from_file_applies_field_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "side = 4").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.marker, Marker::X);
        assert_eq!(config.side, 4);
        assert!(!config.computer_starts);
    }

    #[test]
    fn test_cli_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "marker = \"x\"\nside = 3").unwrap();

        let cli = Cli {
            marker: Some(Marker::O),
            side: None,
            computer_starts: true,
            config: file.path().to_path_buf(),
        };
        let config = GameConfig::resolve(&cli).unwrap();
        assert_eq!(config.marker, Marker::O);
        assert_eq!(config.side, 3);
        assert!(config.computer_starts);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cli = Cli {
            marker: None,
            side: None,
            computer_starts: false,
            config: std::path::PathBuf::from("definitely-not-here.toml"),
        };
        assert_eq!(GameConfig::resolve(&cli).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_malformed_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "side = \"plenty\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("parse"));
    }
}
