//! Event-driven statistics.
//!
//! The aggregator is a pure subscriber: it learns everything from events
//! and writes only to its own rows. Combat events carry no seat, so the
//! aggregator remembers whose turn it is from the last `BeginTurn`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::{MatchOutcome, PlayerId};
use crate::events::{EventBus, EventKind, GameEvent};

use super::summary::{MatchSummary, PlayerStats};

/// Accumulates one [`PlayerStats`] row per seat.
#[derive(Clone, Debug, Default)]
pub struct StatsAggregator {
    rows: BTreeMap<PlayerId, PlayerStats>,
    current: Option<PlayerId>,
    turns_played: u32,
    outcome: Option<MatchOutcome>,
}

impl StatsAggregator {
    /// Create rows for every seat up front.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = (PlayerId, S)>,
        S: Into<String>,
    {
        let rows = players
            .into_iter()
            .map(|(seat, name)| (seat, PlayerStats::new(seat, name)))
            .collect();
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Subscribe to every event kind on `bus`.
    ///
    /// The returned handle stays valid after the match; read the summary
    /// from it once the turn loop is done.
    pub fn attach(self, bus: &mut EventBus) -> Rc<RefCell<Self>> {
        let shared = Rc::new(RefCell::new(self));
        for kind in EventKind::ALL {
            let sink = Rc::clone(&shared);
            bus.subscribe(kind, move |event| sink.borrow_mut().handle(event));
        }
        shared
    }

    /// Update counters for one event.
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BeginTurn { player, .. } => {
                self.current = Some(*player);
                self.row(*player).turns_taken += 1;
            }
            GameEvent::CardsDrawn { player, cards } => {
                self.row(*player).cards_naturally_drawn += count(cards.len());
            }
            GameEvent::CardsForceDrawn { player, cards, .. } => {
                self.row(*player).cards_force_drawn += count(cards.len());
            }
            GameEvent::CardFatigueDamage { player, damage, .. } => {
                self.row(*player).fatigue_damage_taken += i64::from(*damage);
            }
            GameEvent::CardPlayed { player, .. } => {
                self.row(*player).cards_played += 1;
            }
            GameEvent::MonsterCardPlayed { player, .. } => {
                self.row(*player).monsters_played += 1;
            }
            GameEvent::SpellCardPlayed { player, .. } => {
                self.row(*player).spells_played += 1;
            }
            GameEvent::CardsDiscardedFromHand { player, cards } => {
                self.row(*player).cards_discarded += count(cards.len());
            }
            GameEvent::CardsAddedToDeck { player, count: added } => {
                self.row(*player).cards_added_to_deck += count(*added);
            }
            GameEvent::ReturnToHand { player, cards } => {
                self.row(*player).cards_returned_to_hand += count(cards.len());
            }
            GameEvent::MonsterAttacking { attacker, defender } => {
                if let Some(current) = self.turn_owner(event) {
                    let row = self.row(current);
                    row.monster_damage_done += i64::from(attacker.attack);
                    row.monster_damage_taken += i64::from(defender.attack);
                }
            }
            GameEvent::MonsterDefending { attacker, defender } => {
                if let Some(current) = self.turn_owner(event) {
                    let row = self.row(current.opponent());
                    row.monster_damage_taken += i64::from(attacker.attack);
                    row.monster_damage_done += i64::from(defender.attack);
                }
            }
            GameEvent::HeroDefending { attacker, .. } => {
                if let Some(current) = self.turn_owner(event) {
                    let damage = i64::from(attacker.attack);
                    self.row(current).hero_damage_done += damage;
                    self.row(current.opponent()).hero_damage_taken += damage;
                }
            }
            GameEvent::HeroGainHealth { player, amount, .. } => {
                self.row(*player).hero_healing += i64::from(*amount);
            }
            GameEvent::RecordManaAvailable { player, amount } => {
                self.row(*player).mana_available += u64::from(*amount);
            }
            GameEvent::RecordManaUsed { player, amount } => {
                self.row(*player).mana_used += u64::from(*amount);
            }
            GameEvent::FinalTurnCount { turns } => {
                self.turns_played = *turns;
            }
            GameEvent::WinnerDecided { outcome } => {
                self.outcome = Some(*outcome);
            }
            GameEvent::MonsterDied { player, cards } => {
                self.row(*player).monsters_lost += count(cards.len());
            }
        }
    }

    /// Counters for a seat, if it has a row.
    #[must_use]
    pub fn stats(&self, seat: PlayerId) -> Option<&PlayerStats> {
        self.rows.get(&seat)
    }

    /// Seat whose turn it is, per the last `BeginTurn`.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Snapshot of everything collected so far.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        let winning_player = match self.outcome {
            Some(MatchOutcome::Winner(seat)) => self
                .rows
                .get(&seat)
                .map_or_else(|| seat.to_string(), |row| row.name.clone()),
            Some(MatchOutcome::Tie) | None => MatchSummary::TIE.to_string(),
        };

        MatchSummary {
            turns_played: self.turns_played,
            winning_player,
            player_stats: self.rows.values().cloned().collect(),
            outcome: self.outcome,
        }
    }

    /// Row for a seat, created on first use for seats nobody registered.
    fn row(&mut self, seat: PlayerId) -> &mut PlayerStats {
        self.rows.entry(seat).or_insert_with(|| {
            tracing::warn!(player = %seat, "event for unregistered player");
            PlayerStats::new(seat, seat.to_string())
        })
    }

    fn turn_owner(&self, event: &GameEvent) -> Option<PlayerId> {
        if self.current.is_none() {
            tracing::warn!(event = %event.kind(), "combat event before any turn began");
        }
        self.current
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
