//! Core engine types: player and card handles, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use entity::{EntityAllocator, EntityId};
pub use error::{ConfigError, MatchError};
pub use outcome::MatchOutcome;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
