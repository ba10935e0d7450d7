//! Match statistics, collected from the event bus.

pub mod aggregator;
pub mod summary;

pub use aggregator::StatsAggregator;
pub use summary::{MatchSummary, PlayerStats};

pub use crate::core::MatchOutcome;
