use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameState, Player};

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board rows (top to bottom).
    pub rows: usize,
    /// Number of board columns.
    pub columns: usize,
    /// Which player moves first.
    pub starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            columns: 7,
            starting_player: Player::Star,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values. A board smaller than 4x4 cannot hold a
    /// four-in-a-row, so such configs are rejected outright rather than
    /// clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 4 {
            return Err(ConfigError::Validation("rows must be >= 4".into()));
        }
        if self.columns < 4 {
            return Err(ConfigError::Validation("columns must be >= 4".into()));
        }
        Ok(())
    }

    /// Build a fresh game state from this configuration.
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.rows, self.columns, self.starting_player)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.starting_player, Player::Star);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("rows = 8").unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, 7);
        assert_eq!(config.starting_player, Player::Star);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
    }

    #[test]
    fn test_starting_player_from_toml() {
        let config: GameConfig = toml::from_str(r#"starting_player = "moon""#).unwrap();
        assert_eq!(config.starting_player, Player::Moon);
    }

    #[test]
    fn test_unknown_starting_player_rejected() {
        assert!(toml::from_str::<GameConfig>(r#"starting_player = "sun""#).is_err());
    }

    #[test]
    fn test_validation_rejects_small_rows() {
        let mut config = GameConfig::default();
        config.rows = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_small_columns() {
        let mut config = GameConfig::default();
        config.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 5
columns = 9
starting_player = "moon"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 9);
        assert_eq!(config.starting_player, Player::Moon);
    }

    #[test]
    fn test_load_rejects_invalid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "rows = 2").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_initial_state_matches_config() {
        let config: GameConfig = toml::from_str("rows = 4\ncolumns = 5").unwrap();
        let state = config.initial_state();
        assert_eq!(state.board().rows(), 4);
        assert_eq!(state.board().cols(), 5);
        assert_eq!(state.phase(), Phase::InProgress);
    }
}
