//! Match configuration.
//!
//! `MatchConfig` holds the numeric rules of a duel. Every field has a
//! default, so an empty TOML file (or no file at all) gives the standard
//! ruleset:
//!
//! ```toml
//! starting_hitpoints = 30
//! max_turns = 300
//! max_mana = 10
//! hand_limit = 10
//! board_limit = 7
//! first_player_hand = 3
//! second_player_hand = 4
//! # seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Rules for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Hero hitpoints at match start.
    pub starting_hitpoints: i32,

    /// Hard cap on full turns (both players acting once).
    pub max_turns: u32,

    /// Ceiling for a player's total mana.
    pub max_mana: u32,

    /// Maximum cards in hand; further draws are discarded.
    pub hand_limit: usize,

    /// Maximum monsters on a board.
    pub board_limit: usize,

    /// Opening draw for the player who acts first.
    pub first_player_hand: usize,

    /// Opening draw for the player who acts second (before the bonus token).
    pub second_player_hand: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_hitpoints: 30,
            max_turns: 300,
            max_mana: 10,
            hand_limit: 10,
            board_limit: 7,
            first_player_hand: 3,
            second_player_hand: 4,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Toml {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), "loaded match config");
        Ok(config)
    }

    /// Set the seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set starting hitpoints (builder pattern).
    #[must_use]
    pub fn with_starting_hitpoints(mut self, hitpoints: i32) -> Self {
        self.starting_hitpoints = hitpoints;
        self
    }

    /// Set the turn cap (builder pattern).
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Reject values the turn loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_hitpoints <= 0 {
            return Err(ConfigError::Invalid(
                "starting_hitpoints must be positive".into(),
            ));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::Invalid("max_turns must be positive".into()));
        }
        if self.hand_limit == 0 {
            return Err(ConfigError::Invalid("hand_limit must be positive".into()));
        }
        // The second player also receives the bonus token.
        if self.first_player_hand > self.hand_limit || self.second_player_hand + 1 > self.hand_limit {
            return Err(ConfigError::Invalid(format!(
                "opening hands ({} / {}+1) exceed hand_limit {}",
                self.first_player_hand, self.second_player_hand, self.hand_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.starting_hitpoints, 30);
        assert_eq!(config.max_turns, 300);
        assert_eq!(config.first_player_hand, 3);
        assert_eq!(config.second_player_hand, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = MatchConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = MatchConfig::from_toml_str("max_turns = 50\nseed = 7\n", "inline").unwrap();

        assert_eq!(config.max_turns, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_mana, 10);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = MatchConfig::from_toml_str("max_turnz = 50", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_turns() {
        let err = MatchConfig::default().with_max_turns(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_rejects_oversized_opening_hand() {
        let config = MatchConfig {
            hand_limit: 4,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatchConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
