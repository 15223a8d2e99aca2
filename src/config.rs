use std::path::Path;

use tracing::warn;

use crate::ai::MinimaxAgent;
use crate::error::{ConfigError, EngineError};
use crate::game::{Player, COLS, ROWS};

/// Minimax engine settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: usize,
    pub player: Player,
    pub rows: usize,
    pub columns: usize,
    /// Fixed seed for move ordering; random per run when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: 6,
            player: Player::Yellow,
            rows: ROWS,
            columns: COLS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Build the engine this configuration describes.
    pub fn build(&self) -> Result<MinimaxAgent, EngineError> {
        let agent = MinimaxAgent::new(self.depth, self.player, self.rows, self.columns)?;
        Ok(match self.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }
}

/// Who the engine plays against in `play` matches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Random,
    Minimax,
}

/// Settings for headless matches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub games: usize,
    pub opponent: OpponentKind,
    /// Search depth of the opponent when it is also a minimax engine.
    pub opponent_depth: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            games: 2,
            opponent: OpponentKind::Random,
            opponent_depth: 2,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub play: PlayConfig,
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
        if self.engine.depth == 0 {
            return Err(ConfigError::Validation("engine.depth must be >= 1".into()));
        }
        if self.engine.rows == 0 {
            return Err(ConfigError::Validation("engine.rows must be >= 1".into()));
        }
        if self.engine.columns == 0 {
            return Err(ConfigError::Validation(
                "engine.columns must be >= 1".into(),
            ));
        }
        if self.play.games == 0 {
            return Err(ConfigError::Validation("play.games must be >= 1".into()));
        }
        if self.play.opponent_depth == 0 {
            return Err(ConfigError::Validation(
                "play.opponent_depth must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
