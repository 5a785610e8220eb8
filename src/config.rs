//! Game and self-play configuration, loadable from TOML.
//!
//! ```toml
//! topology = "square"
//! size = 8
//! a = "human"
//! b = "capture-max"
//! seed = 7
//!
//! [selfplay]
//! games = 200
//! threads = 8
//! max_plies = 300
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Topology;
use crate::error::ConfigError;
use crate::selfplay::Participant;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub topology: Topology,
    /// Side length; the topology's default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    /// Who plays A (X, moves first).
    pub a: Participant,
    /// Who plays B (O).
    pub b: Participant,
    /// Seed for random participants. Self-play game `k` uses `seed + k`.
    pub seed: u64,
    /// Mark legal moves with `*` when printing the board.
    pub hints: bool,
    pub selfplay: SelfPlaySettings,
}

/// Batch self-play settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    /// Number of games to play.
    pub games: usize,
    /// Worker threads for concurrent games.
    pub threads: usize,
    /// Plies after which a game is cut off.
    pub max_plies: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            topology: Topology::Hex,
            size: None,
            a: Participant::Human,
            b: Participant::CaptureMax,
            seed: 0,
            hints: false,
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            games: 100,
            threads: 4,
            max_plies: 500,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The board size to play on.
    pub fn board_size(&self) -> i32 {
        self.size.unwrap_or_else(|| self.topology.default_size())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size();
        if !self.topology.is_valid_size(size) {
            return Err(ConfigError::Validation(format!(
                "size {size} is not valid for a {} board",
                self.topology
            )));
        }
        if self.selfplay.threads == 0 {
            return Err(ConfigError::Validation("selfplay.threads must be > 0".into()));
        }
        if self.selfplay.games == 0 {
            return Err(ConfigError::Validation("selfplay.games must be > 0".into()));
        }
        if self.selfplay.max_plies == 0 {
            return Err(ConfigError::Validation("selfplay.max_plies must be > 0".into()));
        }
        Ok(())
    }

    /// Serialize the default configuration as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.board_size(), 6);
    }

    #[test]
    fn empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn default_toml_roundtrips() {
        let config: GameConfig = toml::from_str(&GameConfig::default_toml()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn size_follows_topology_default() {
        let config = GameConfig {
            topology: Topology::Square,
            ..Default::default()
        };
        assert_eq!(config.board_size(), 8);
    }

    #[test]
    fn validation_rejects_bad_size() {
        let config = GameConfig {
            topology: Topology::Square,
            size: Some(5),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = GameConfig {
            topology: Topology::Hex,
            size: Some(2),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            topology: Topology::Square,
            size: Some(50_000),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validation_rejects_zero_threads() {
        let mut config = GameConfig::default();
        config.selfplay.threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_reversi.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
topology = "square"
size = 6
a = "random"
b = "capture-max"

[selfplay]
games = 12
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.topology, Topology::Square);
        assert_eq!(config.board_size(), 6);
        assert_eq!(config.a, Participant::Random);
        assert_eq!(config.b, Participant::CaptureMax);
        assert_eq!(config.selfplay.games, 12);
        // Others are defaults
        assert_eq!(config.selfplay.threads, 4);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "topology = \"square\"\nsize = 7\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Validation(_))));

        std::fs::write(&path, "topology = \"triangle\"\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = GameConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
