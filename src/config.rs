use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::Rules;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
    pub rules: RulesConfig,
}

/// Names used when a player does not type one in.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_one: String,
    pub player_two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player_one: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Magenta,
    Cyan,
    Green,
    Blue,
    White,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colours on the console board.
    pub color: bool,
    /// Colour of the tokens in the winning line.
    pub win_highlight: HighlightColor,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            win_highlight: HighlightColor::Magenta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub detect_draw: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig { detect_draw: true }
    }
}

impl From<&RulesConfig> for Rules {
    fn from(config: &RulesConfig) -> Self {
        Rules {
            detect_draw: config.detect_draw,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let one = self.players.player_one.trim();
        let two = self.players.player_two.trim();
        if one.is_empty() || two.is_empty() {
            return Err(ConfigError::Validation(
                "players.player_one and players.player_two must not be empty".into(),
            ));
        }
        if one == two {
            return Err(ConfigError::Validation(
                "players.player_one and players.player_two must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules::from(&self.rules)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
