//! Front-end configuration loaded from TOML, with CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictac_core::{MoveOrder, Player};
use tracing::{debug, info, instrument};

/// Initial order of the move list, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrderSetting {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl From<MoveOrderSetting> for MoveOrder {
    fn from(setting: MoveOrderSetting) -> Self {
        match setting {
            MoveOrderSetting::Ascending => MoveOrder::Ascending,
            MoveOrderSetting::Descending => MoveOrder::Descending,
        }
    }
}

/// Mark colours as written in the config file.
///
/// Accepts anything ratatui's `Color` parses: names like `"green"`,
/// indices like `"208"` or hex like `"#ffa500"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Colour for X.
    #[serde(default = "default_x_color")]
    x: String,

    /// Colour for O.
    #[serde(default = "default_o_color")]
    o: String,
}

#[instrument]
fn default_x_color() -> String {
    "green".to_string()
}

#[instrument]
fn default_o_color() -> String {
    "#ffa500".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x: default_x_color(),
            o: default_o_color(),
        }
    }
}

/// Parsed mark colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour for X.
    pub x: Color,
    /// Colour for O.
    pub o: Color,
}

impl Theme {
    /// Colour for `player`'s marks.
    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Green,
            o: Color::Rgb(0xff, 0xa5, 0x00),
        }
    }
}

/// Configuration for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Open directly on the board.
    #[serde(default)]
    skip_start_screen: bool,

    /// Initial move list order.
    #[serde(default)]
    move_order: MoveOrderSetting,

    /// Mark colours.
    #[serde(default)]
    theme: ThemeConfig,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info,tictac_core=debug".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            skip_start_screen: false,
            move_order: MoveOrderSetting::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides. Flags only ever switch features on.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.skip_start_screen {
            self.skip_start_screen = true;
        }
        if cli.descending {
            self.move_order = MoveOrderSetting::Descending;
        }
        self
    }

    /// Initial move list order.
    pub fn initial_order(&self) -> MoveOrder {
        self.move_order.into()
    }

    /// Parses the configured colours.
    #[instrument(skip(self))]
    pub fn parse_theme(&self) -> Result<Theme, ConfigError> {
        let parse = |name: &str, value: &str| {
            Color::from_str(value).map_err(|_| {
                ConfigError::new(format!("Invalid colour {:?} for {}", value, name))
            })
        };
        Ok(Theme {
            x: parse("x", &self.theme.x)?,
            o: parse("o", &self.theme.o)?,
        })
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
    #[instrument(skip(message))]
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

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.initial_order(), MoveOrder::Ascending);
        assert_eq!(config.parse_theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r##"
log_file = "/tmp/game.log"
log_filter = "debug"
skip_start_screen = true
move_order = "descending"

[theme]
x = "blue"
o = "#ff0000"
"##,
        );
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.log_filter(), "debug");
        assert!(*config.skip_start_screen());
        assert_eq!(config.initial_order(), MoveOrder::Descending);
        let theme = config.parse_theme().unwrap();
        assert_eq!(theme.x, Color::Blue);
        assert_eq!(theme.o, Color::Rgb(0xff, 0, 0));
    }

    #[test]
    fn test_bad_colour_rejected() {
        let file = write_config("[theme]\nx = \"not-a-colour\"\n");
        let config = TuiConfig::from_file(file.path()).unwrap();
        let err = config.parse_theme().unwrap_err();
        assert!(err.message.contains("not-a-colour"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("skip_start_screen = maybe");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            config: PathBuf::from("tictac.toml"),
            log_file: Some(PathBuf::from("other.log")),
            skip_start_screen: true,
            descending: true,
        };
        let config = TuiConfig::default().with_overrides(&cli);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert!(*config.skip_start_screen());
        assert_eq!(config.initial_order(), MoveOrder::Descending);
    }
}
