use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{
    GameTimeline, Player, STANDARD_HEIGHT, STANDARD_WIDTH, STANDARD_WIN_LENGTH,
};

/// Grid dimensions and the line length needed to win.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            win_length: STANDARD_WIN_LENGTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Turn order.
    pub players: Vec<Player>,
    /// Refuse further moves once someone has won.
    pub lock_after_win: bool,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: vec![Player::Red, Player::Yellow],
            lock_after_win: true,
            board: BoardConfig::default(),
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
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.board.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be >= 1".into(),
            ));
        }
        if self.players.len() < 2 || self.players.len() > Player::ALL.len() {
            return Err(ConfigError::Validation(format!(
                "players must list 2 to {} players",
                Player::ALL.len()
            )));
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].contains(player) {
                return Err(ConfigError::Validation(format!(
                    "player {} is listed more than once",
                    player.name()
                )));
            }
        }

        Ok(())
    }

    /// Build a fresh game from this configuration.
    pub fn new_timeline(&self) -> Result<GameTimeline<Player>, ConfigError> {
        self.validate()?;
        let timeline = GameTimeline::new(
            self.board.width,
            self.board.height,
            self.board.win_length,
            self.players.clone(),
        )?;
        Ok(timeline.with_lock_after_win(self.lock_after_win))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
