//! # ccg-duel
//!
//! Turn-resolution engine for a two-player card battle, with an event-driven
//! statistics aggregator.
//!
//! ## Design Principles
//!
//! 1. **Closed move set**: every action is a [`Move`] variant that validates
//!    and applies itself. Strategies only pick from what the
//!    [`MoveValidator`] produced.
//!
//! 2. **Per-match event bus**: each [`Match`] owns its [`EventBus`]. Events are
//!    facts about what already happened; statistics are derived from them
//!    and nothing else.
//!
//! 3. **Seats, not names**: players are keyed by [`PlayerId`], so two players
//!    may share a display name.
//!
//! 4. **Reproducible**: every random choice draws from the match's seeded
//!    [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: player and card handles, RNG, configuration, errors, outcome
//! - `events`: game events and the synchronous bus
//! - `cards`: catalog, definitions, card instances, deck building
//! - `fighter`: the damage-dealing capability and heroes
//! - `zones`: deck, hand, board
//! - `player`: one duelist's hero, zones and mana
//! - `moves`: the move enum, legality, resolution, enumeration
//! - `strategy`: move selection
//! - `game`: match state, the turn loop, batch runs
//! - `stats`: the aggregator and the match summary
//! - `io`: match input files and summary output

pub mod core;
pub mod events;
pub mod cards;
pub mod fighter;
pub mod zones;
pub mod player;
pub mod moves;
pub mod strategy;
pub mod game;
pub mod stats;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EntityId, GameRng, MatchConfig, MatchError, MatchOutcome, PlayerId, PlayerMap,
};

pub use crate::events::{EventBus, EventKind, GameEvent};

pub use crate::cards::{Card, CardCatalog, CardDefinition, ManaToken, MonsterCard, SpellCard, SpellEffect};

pub use crate::fighter::{Fighter, Hero};

pub use crate::player::Player;

pub use crate::moves::{AttackingMove, Move, MoveValidator, Target};

pub use crate::strategy::{GreedyStrategy, RandomStrategy, Strategy, StrategyKind};

pub use crate::game::{run_batch, Match, MatchBuilder, MatchPhase, MatchState, PlayerSetup};

pub use crate::stats::{MatchSummary, PlayerStats, StatsAggregator};

pub use crate::io::MatchInput;
