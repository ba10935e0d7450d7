//! Everything a match mutates while it runs.

use std::sync::Arc;

use crate::cards::CardCatalog;
use crate::core::{EntityAllocator, GameRng, MatchConfig, MatchOutcome, PlayerId, PlayerMap};
use crate::events::{EventBus, GameEvent};
use crate::player::Player;

/// Match state: both players plus the shared resources moves need.
///
/// Strategies get a shared reference; only moves and the turn loop mutate it.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub players: PlayerMap<Player>,
    pub config: MatchConfig,
    pub rng: GameRng,
    /// Hands out handles for cards created mid-match.
    pub ids: EntityAllocator,
    pub catalog: Arc<CardCatalog>,
    /// Full turns started so far.
    pub turn: u32,
}

impl MatchState {
    pub fn new(
        players: PlayerMap<Player>,
        config: MatchConfig,
        rng: GameRng,
        ids: EntityAllocator,
        catalog: Arc<CardCatalog>,
    ) -> Self {
        Self {
            players,
            config,
            rng,
            ids,
            catalog,
            turn: 0,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// True once either hero is at zero or below.
    #[must_use]
    pub fn any_hero_dead(&self) -> bool {
        self.players.values().any(Player::is_dead)
    }

    /// Outcome if the match stopped now.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_deaths(
            self.players[PlayerId::new(0)].is_dead(),
            self.players[PlayerId::new(1)].is_dead(),
        )
    }

    /// Remove dead monsters from both boards.
    ///
    /// Publishes one `MonsterDied` per board that lost something. A second
    /// call with no damage in between does nothing. Returns the number removed.
    pub fn sweep_dead(&mut self, bus: &mut EventBus) -> usize {
        let mut removed = 0;
        for (seat, player) in self.players.iter_mut() {
            let dead = player.board.sweep_dead();
            if dead.is_empty() {
                continue;
            }
            removed += dead.len();
            tracing::debug!(
                player = %seat,
                dead = ?dead.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
                "monsters died"
            );
            bus.publish(GameEvent::MonsterDied {
                player: seat,
                cards: dead.iter().map(|m| m.card_snapshot()).collect(),
            });
        }
        removed
    }
}
