//! Match input files and summary output.
//!
//! Input is JSON naming each seat's deck and strategy:
//!
//! ```json
//! {
//!   "player1": { "deck": ["Frost Yeti", "Fen Raptor"], "strategy": "SimpleStrategy" },
//!   "player2": { "deck": ["Stone Ogre"], "strategy": "random", "name": "Bob" }
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::game::PlayerSetup;
use crate::strategy::StrategyKind;

/// One seat as written in the input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub deck: Vec<String>,
    pub strategy: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// The whole input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInput {
    pub player1: PlayerInput,
    pub player2: PlayerInput,
}

impl MatchInput {
    /// Parse input JSON.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    /// Read and parse an input file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Resolve strategy names and default display names.
    pub fn into_setups(self) -> Result<[PlayerSetup; 2], ConfigError> {
        Ok([
            seat_setup(self.player1, "Player 1")?,
            seat_setup(self.player2, "Player 2")?,
        ])
    }
}

fn seat_setup(input: PlayerInput, default_name: &str) -> Result<PlayerSetup, ConfigError> {
    let strategy: StrategyKind = input.strategy.parse()?;
    if input.deck.is_empty() {
        tracing::warn!(player = default_name, "empty deck; every draw will cause fatigue");
    }
    let name = input.name.unwrap_or_else(|| default_name.to_string());
    Ok(PlayerSetup::new(name, input.deck, strategy))
}

/// Write any summary value as pretty JSON to `output`, or stdout if `None`.
pub fn write_summary<T: Serialize>(summary: &T, output: Option<&Path>) -> Result<(), ConfigError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_json(&mut writer, summary, &path.display().to_string())?;
            writer.flush().map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "summary written");
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_json(&mut lock, summary, "stdout")
        }
    }
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, origin: &str) -> Result<(), ConfigError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|source| ConfigError::Json {
        origin: origin.to_string(),
        source,
    })?;
    writeln!(writer).map_err(|source| ConfigError::Io {
        path: origin.into(),
        source,
    })
}
