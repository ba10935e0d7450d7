//! Running matches.
//!
//! - `MatchState`: players plus the shared RNG, id allocator and catalog
//! - `MatchBuilder` / `Match`: setup and the turn loop
//! - `run_batch`: independent matches in parallel

pub mod batch;
pub mod controller;
pub mod state;

pub use batch::run_batch;
pub use controller::{Match, MatchBuilder, MatchPhase, PlayerSetup};
pub use state::MatchState;
