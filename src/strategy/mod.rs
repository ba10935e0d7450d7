//! Move selection.
//!
//! A [`Strategy`] is handed the legal moves for the active player and picks
//! one. It reads match state but never mutates it; the turn loop applies
//! the chosen move. Any strategy can sit in either seat without the turn
//! loop knowing which one it is.

pub mod greedy;
pub mod random;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameRng, PlayerId};
use crate::game::MatchState;
use crate::moves::Move;

pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;

/// Picks one move from a legal set.
pub trait Strategy: Send {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Offer the current legal moves. Called before every `next_move`.
    fn set_possible_moves(
        &mut self,
        state: &MatchState,
        active: PlayerId,
        opponent: PlayerId,
        moves: &[Move],
    );

    /// Choose from the moves last offered. `None` only if none were offered.
    fn next_move(&mut self, rng: &mut GameRng) -> Option<Move>;
}

/// Strategies selectable by name from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    Greedy,
    Random,
}

impl StrategyKind {
    /// Instantiate a fresh strategy of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Greedy => Box::new(GreedyStrategy::new()),
            StrategyKind::Random => Box::new(RandomStrategy::new()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::Random => "random",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Accepts `greedy` (also `simple` and `SimpleStrategy`) and `random`,
    /// ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "greedy" | "simple" | "simplestrategy" => Ok(StrategyKind::Greedy),
            "random" | "randomstrategy" => Ok(StrategyKind::Random),
            _ => Err(ConfigError::UnknownStrategy(name.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
