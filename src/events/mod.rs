//! Match events and the per-match bus that carries them.
//!
//! The engine publishes; observers such as the stats aggregator subscribe.
//! Nothing in the turn loop reads back what subscribers do.

pub mod bus;
pub mod event;

pub use bus::{EventBus, EventRecorder, Handler};
pub use event::{CardSnapshot, EventKind, FighterSnapshot, GameEvent};
