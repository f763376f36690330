use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Who sits on the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

/// Round setup options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed mode; when absent the session asks at startup.
    pub mode: Option<GameMode>,
    /// Name shown for the heuristic participant.
    pub computer_name: String,
    pub max_name_len: usize,
    /// Seed for the computer's random fallback.
    pub seed: Option<u64>,
    /// Let the computer take the first move in `vs_computer` mode.
    pub computer_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: None,
            computer_name: "Computer".to_string(),
            max_name_len: 20,
            seed: None,
            computer_first: false,
        }
    }
}

/// Results log options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            enabled: true,
            path: PathBuf::from("results.jsonl"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub history: HistoryConfig,
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.computer_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.computer_name must not be empty".into(),
            ));
        }
        if self.game.max_name_len == 0 {
            return Err(ConfigError::Validation(
                "game.max_name_len must be > 0".into(),
            ));
        }
        if self.game.computer_name.trim().chars().count() > self.game.max_name_len {
            return Err(ConfigError::Validation(
                "game.computer_name must fit within game.max_name_len".into(),
            ));
        }
        if self.history.enabled && self.history.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "history.path must be set when history is enabled".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
