//! One side of a match: hero, zones and mana.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{MatchConfig, PlayerId};
use crate::events::{EventBus, GameEvent};
use crate::fighter::{Fighter, Hero};
use crate::zones::{Board, Deck, Hand};

/// Why cards are being drawn. Decides which event reports them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// Opening hand or the start-of-turn draw.
    Natural,
    /// A spell effect; `source` names the spell.
    Forced { source: String },
}

/// A seated player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hero: Hero,
    pub deck: Deck,
    pub hand: Hand,
    pub board: Board,

    /// Mana pool size; grows by one each turn up to the configured maximum.
    pub total_mana: u32,
    /// Mana left to spend this turn.
    pub available_mana: u32,
    /// Mana paid for cards this turn.
    pub spent_this_turn: u32,

    /// Damage dealt by the last empty-deck draw; the next one deals one more.
    pub fatigue: i32,
}

impl Player {
    /// Create a player with an empty hand and board.
    pub fn new(id: PlayerId, name: impl Into<String>, deck: Deck, config: &MatchConfig) -> Self {
        let name = name.into();
        Self {
            id,
            hero: Hero::new(name.clone(), config.starting_hitpoints),
            name,
            deck,
            hand: Hand::new(config.hand_limit),
            board: Board::new(config.board_limit),
            total_mana: 0,
            available_mana: 0,
            spent_this_turn: 0,
            fatigue: 0,
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hero.is_dead()
    }

    /// Grow and refill the mana pool for a new turn. Returns the new total.
    pub fn refresh_mana(&mut self, max_mana: u32) -> u32 {
        self.total_mana = (self.total_mana + 1).min(max_mana);
        self.available_mana = self.total_mana;
        self.spent_this_turn = 0;
        self.total_mana
    }

    /// Spend mana if there is enough. Returns false and changes nothing otherwise.
    pub fn pay(&mut self, cost: u32) -> bool {
        if cost > self.available_mana {
            return false;
        }
        self.available_mana -= cost;
        self.spent_this_turn += cost;
        true
    }

    /// Add mana for this turn only.
    pub fn gain_mana(&mut self, amount: u32) {
        self.available_mana += amount;
    }

    /// Draw `count` cards from the top of the deck.
    ///
    /// An empty deck deals escalating fatigue damage instead. A card drawn
    /// into a full hand is discarded. Drawing stops once the hero is dead.
    /// Returns how many cards reached the hand.
    pub fn draw_cards(&mut self, count: usize, reason: DrawReason, bus: &mut EventBus) -> usize {
        let mut drawn = Vec::new();
        let mut burned = Vec::new();

        for _ in 0..count {
            if self.hero.is_dead() {
                break;
            }
            let Some(card) = self.deck.draw() else {
                self.take_fatigue(bus);
                continue;
            };
            let snapshot = card.snapshot();
            match self.hand.add(card) {
                Ok(()) => drawn.push(snapshot),
                Err(card) => {
                    tracing::debug!(player = %self.id, card = %card, "hand full, card burned");
                    burned.push(snapshot);
                }
            }
        }

        let added = drawn.len();
        if !drawn.is_empty() {
            let event = match reason {
                DrawReason::Natural => GameEvent::CardsDrawn {
                    player: self.id,
                    cards: drawn,
                },
                DrawReason::Forced { source } => GameEvent::CardsForceDrawn {
                    player: self.id,
                    source,
                    cards: drawn,
                },
            };
            bus.publish(event);
        }
        if !burned.is_empty() {
            bus.publish(GameEvent::CardsDiscardedFromHand {
                player: self.id,
                cards: burned,
            });
        }
        added
    }

    /// Put a card straight into the hand, bypassing the deck.
    ///
    /// Used for the opening mana token. A full hand hands the card back.
    pub fn give(&mut self, card: Card) -> Result<(), Card> {
        self.hand.add(card)
    }

    fn take_fatigue(&mut self, bus: &mut EventBus) {
        self.fatigue += 1;
        self.hero.take_damage(self.fatigue);
        tracing::debug!(
            player = %self.id,
            damage = self.fatigue,
            hitpoints = self.hero.hitpoints,
            "fatigue"
        );
        bus.publish(GameEvent::CardFatigueDamage {
            player: self.id,
            damage: self.fatigue,
            hitpoints_left: self.hero.hitpoints,
        });
    }
}
