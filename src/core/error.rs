//! Error types.
//!
//! Two families:
//! - [`ConfigError`]: bad input detected while setting a match up. Always
//!   raised before the first turn is simulated.
//! - [`MatchError`]: wraps configuration failures and adds
//!   [`MatchError::Invariant`] for engine bugs found mid-match. An invariant
//!   failure aborts the match instead of producing a skewed summary.
//!
//! Running out of cards, a hero dying and hitting the turn cap are normal
//! match transitions and never surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Setup and input errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown card '{0}'")]
    UnknownCard(String),

    #[error("card '{0}' is defined more than once")]
    DuplicateCard(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that abort a match.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("engine invariant violated: {0}")]
    Invariant(String),
}

impl MatchError {
    /// Shorthand for building an invariant failure.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}
