//! Many independent matches in parallel.
//!
//! Each match builds its own bus, aggregator and RNG inside the worker that
//! runs it, so nothing is shared between matches except the read-only
//! catalog.

use std::sync::Arc;

use rayon::prelude::*;

use super::controller::{MatchBuilder, PlayerSetup};
use crate::cards::CardCatalog;
use crate::core::{GameRng, MatchConfig, MatchError};
use crate::stats::MatchSummary;

/// Run `count` matches between the same two seats.
///
/// Match `i` is seeded with `base + i`, where `base` is the configured seed
/// (or a random one). Results come back in match order.
pub fn run_batch(
    config: &MatchConfig,
    catalog: &Arc<CardCatalog>,
    players: &[PlayerSetup; 2],
    count: usize,
) -> Vec<Result<MatchSummary, MatchError>> {
    let base = config
        .seed
        .unwrap_or_else(|| GameRng::from_entropy().seed());
    tracing::info!(count, base_seed = base, "running batch");

    (0..count)
        .into_par_iter()
        .map(|index| {
            let seed = base.wrapping_add(index as u64);
            MatchBuilder::new(config.clone().with_seed(seed))
                .catalog(Arc::clone(catalog))
                .player(players[0].clone())
                .player(players[1].clone())
                .build()?
                .run()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    fn setups() -> [PlayerSetup; 2] {
        let deck: Vec<String> = ["Fen Raptor", "River Snapper", "Frost Yeti", "Mind Rot"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        [
            PlayerSetup::new("Alice", deck.clone(), StrategyKind::Greedy),
            PlayerSetup::new("Bob", deck, StrategyKind::Random),
        ]
    }

    #[test]
    fn test_batch_is_reproducible() {
        let config = MatchConfig::default().with_seed(100);
        let catalog = Arc::new(CardCatalog::builtin().unwrap());

        let first: Vec<_> = run_batch(&config, &catalog, &setups(), 4)
            .into_iter()
            .map(Result::unwrap)
            .collect();
        let second: Vec<_> = run_batch(&config, &catalog, &setups(), 4)
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_reports_setup_errors_per_match() {
        let config = MatchConfig::default().with_seed(1);
        let catalog = Arc::new(CardCatalog::builtin().unwrap());
        let mut players = setups();
        players[1].deck.push("Dragon".into());

        let results = run_batch(&config, &catalog, &players, 2);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(Result::is_err));
    }
}
