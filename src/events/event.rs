//! Match event types.
//!
//! Every observable thing that happens during a match is published as a
//! [`GameEvent`]. The set of events is closed: each variant corresponds to
//! one [`EventKind`] tag, and subscribers register per tag.
//!
//! Payloads are snapshots. A subscriber sees names and numbers as they were
//! when the event fired and never holds a reference into match state.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, MatchOutcome, PlayerId};

/// Event tag. Subscriptions are keyed by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    BeginTurn,
    CardsDrawn,
    CardsForceDrawn,
    CardFatigueDamage,
    CardPlayed,
    MonsterCardPlayed,
    SpellCardPlayed,
    CardsDiscardedFromHand,
    CardsAddedToDeck,
    ReturnToHand,
    MonsterAttacking,
    MonsterDefending,
    HeroDefending,
    HeroGainHealth,
    RecordManaAvailable,
    RecordManaUsed,
    FinalTurnCount,
    WinnerDecided,
    MonsterDied,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 19] = [
        EventKind::BeginTurn,
        EventKind::CardsDrawn,
        EventKind::CardsForceDrawn,
        EventKind::CardFatigueDamage,
        EventKind::CardPlayed,
        EventKind::MonsterCardPlayed,
        EventKind::SpellCardPlayed,
        EventKind::CardsDiscardedFromHand,
        EventKind::CardsAddedToDeck,
        EventKind::ReturnToHand,
        EventKind::MonsterAttacking,
        EventKind::MonsterDefending,
        EventKind::HeroDefending,
        EventKind::HeroGainHealth,
        EventKind::RecordManaAvailable,
        EventKind::RecordManaUsed,
        EventKind::FinalTurnCount,
        EventKind::WinnerDecided,
        EventKind::MonsterDied,
    ];

    /// Wire name of the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::BeginTurn => "begin_turn",
            EventKind::CardsDrawn => "cards_drawn",
            EventKind::CardsForceDrawn => "cards_force_drawn",
            EventKind::CardFatigueDamage => "card_fatigue_damage",
            EventKind::CardPlayed => "card_played",
            EventKind::MonsterCardPlayed => "monster_card_played",
            EventKind::SpellCardPlayed => "spell_card_played",
            EventKind::CardsDiscardedFromHand => "cards_discarded_from_hand",
            EventKind::CardsAddedToDeck => "cards_added_to_deck",
            EventKind::ReturnToHand => "return_to_hand",
            EventKind::MonsterAttacking => "monster_attacking",
            EventKind::MonsterDefending => "monster_defending",
            EventKind::HeroDefending => "hero_defending",
            EventKind::HeroGainHealth => "hero_gain_health",
            EventKind::RecordManaAvailable => "record_mana_available",
            EventKind::RecordManaUsed => "record_mana_used",
            EventKind::FinalTurnCount => "final_turn_count",
            EventKind::WinnerDecided => "winner_decided",
            EventKind::MonsterDied => "monster_died",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a card at the moment an event fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: EntityId,
    pub name: String,
}

impl CardSnapshot {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One side of a combat exchange, captured after damage was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    /// `None` for heroes.
    pub id: Option<EntityId>,
    pub name: String,
    /// Damage this fighter deals in an exchange.
    pub attack: i32,
    /// Remaining hitpoints after the exchange.
    pub hitpoints: i32,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A player's turn starts. Establishes who "current" refers to.
    BeginTurn {
        player: PlayerId,
        opponent: PlayerId,
        turn: u32,
    },

    /// Cards drawn as part of the opening hand or the turn's natural draw.
    CardsDrawn {
        player: PlayerId,
        cards: Vec<CardSnapshot>,
    },

    /// Cards drawn because a spell said so.
    CardsForceDrawn {
        player: PlayerId,
        source: String,
        cards: Vec<CardSnapshot>,
    },

    /// A draw from an empty deck hurt the hero.
    CardFatigueDamage {
        player: PlayerId,
        damage: i32,
        hitpoints_left: i32,
    },

    /// Any card left the hand to be played.
    CardPlayed {
        player: PlayerId,
        card: CardSnapshot,
        cost: u32,
    },

    MonsterCardPlayed {
        player: PlayerId,
        card: CardSnapshot,
    },

    SpellCardPlayed {
        player: PlayerId,
        card: CardSnapshot,
    },

    /// Cards removed from a hand without being played, or drawn into a full hand.
    CardsDiscardedFromHand {
        player: PlayerId,
        cards: Vec<CardSnapshot>,
    },

    CardsAddedToDeck {
        player: PlayerId,
        count: usize,
    },

    /// Monsters bounced from `player`'s board back to their hand.
    ReturnToHand {
        player: PlayerId,
        cards: Vec<CardSnapshot>,
    },

    /// A monster attacked. Always followed by `MonsterDefending` or `HeroDefending`.
    MonsterAttacking {
        attacker: FighterSnapshot,
        defender: FighterSnapshot,
    },

    MonsterDefending {
        attacker: FighterSnapshot,
        defender: FighterSnapshot,
    },

    HeroDefending {
        attacker: FighterSnapshot,
        defender: FighterSnapshot,
    },

    HeroGainHealth {
        player: PlayerId,
        source: String,
        amount: i32,
    },

    /// Total mana the player has this turn.
    RecordManaAvailable {
        player: PlayerId,
        amount: u32,
    },

    /// Mana the player spent this turn.
    RecordManaUsed {
        player: PlayerId,
        amount: u32,
    },

    /// Full turns played when the match ended.
    FinalTurnCount {
        turns: u32,
    },

    WinnerDecided {
        outcome: MatchOutcome,
    },

    /// Monsters removed from `player`'s board with non-positive hitpoints.
    MonsterDied {
        player: PlayerId,
        cards: Vec<CardSnapshot>,
    },
}

impl GameEvent {
    /// Tag used for subscription lookup.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::BeginTurn { .. } => EventKind::BeginTurn,
            GameEvent::CardsDrawn { .. } => EventKind::CardsDrawn,
            GameEvent::CardsForceDrawn { .. } => EventKind::CardsForceDrawn,
            GameEvent::CardFatigueDamage { .. } => EventKind::CardFatigueDamage,
            GameEvent::CardPlayed { .. } => EventKind::CardPlayed,
            GameEvent::MonsterCardPlayed { .. } => EventKind::MonsterCardPlayed,
            GameEvent::SpellCardPlayed { .. } => EventKind::SpellCardPlayed,
            GameEvent::CardsDiscardedFromHand { .. } => EventKind::CardsDiscardedFromHand,
            GameEvent::CardsAddedToDeck { .. } => EventKind::CardsAddedToDeck,
            GameEvent::ReturnToHand { .. } => EventKind::ReturnToHand,
            GameEvent::MonsterAttacking { .. } => EventKind::MonsterAttacking,
            GameEvent::MonsterDefending { .. } => EventKind::MonsterDefending,
            GameEvent::HeroDefending { .. } => EventKind::HeroDefending,
            GameEvent::HeroGainHealth { .. } => EventKind::HeroGainHealth,
            GameEvent::RecordManaAvailable { .. } => EventKind::RecordManaAvailable,
            GameEvent::RecordManaUsed { .. } => EventKind::RecordManaUsed,
            GameEvent::FinalTurnCount { .. } => EventKind::FinalTurnCount,
            GameEvent::WinnerDecided { .. } => EventKind::WinnerDecided,
            GameEvent::MonsterDied { .. } => EventKind::MonsterDied,
        }
    }

    /// The seat an event is about, when it names one.
    ///
    /// Combat events and match-level events return `None`; their subject is
    /// implied by the surrounding `BeginTurn`.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::BeginTurn { player, .. }
            | GameEvent::CardsDrawn { player, .. }
            | GameEvent::CardsForceDrawn { player, .. }
            | GameEvent::CardFatigueDamage { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::MonsterCardPlayed { player, .. }
            | GameEvent::SpellCardPlayed { player, .. }
            | GameEvent::CardsDiscardedFromHand { player, .. }
            | GameEvent::CardsAddedToDeck { player, .. }
            | GameEvent::ReturnToHand { player, .. }
            | GameEvent::HeroGainHealth { player, .. }
            | GameEvent::RecordManaAvailable { player, .. }
            | GameEvent::RecordManaUsed { player, .. }
            | GameEvent::MonsterDied { player, .. } => Some(*player),
            GameEvent::MonsterAttacking { .. }
            | GameEvent::MonsterDefending { .. }
            | GameEvent::HeroDefending { .. }
            | GameEvent::FinalTurnCount { .. }
            | GameEvent::WinnerDecided { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<_> = EventKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EventKind::ALL.len());
    }

    #[test]
    fn test_kind_matches_variant() {
        let event = GameEvent::RecordManaUsed {
            player: PlayerId::new(1),
            amount: 4,
        };
        assert_eq!(event.kind(), EventKind::RecordManaUsed);
        assert_eq!(event.player(), Some(PlayerId::new(1)));
        assert_eq!(event.kind().to_string(), "record_mana_used");
    }

    #[test]
    fn test_combat_event_has_no_player() {
        let fighter = FighterSnapshot {
            id: None,
            name: "Hero".into(),
            attack: 0,
            hitpoints: 30,
        };
        let event = GameEvent::HeroDefending {
            attacker: fighter.clone(),
            defender: fighter,
        };
        assert_eq!(event.player(), None);
    }

    #[test]
    fn test_serde_tag_matches_kind_name() {
        let event = GameEvent::FinalTurnCount { turns: 12 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], event.kind().as_str());
        assert_eq!(json["turns"], 12);
    }
}
