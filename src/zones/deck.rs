//! A player's draw pile.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EntityId, GameRng};

/// Where a card goes when added to a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeckPosition {
    /// Drawn next.
    Top,
    /// Drawn last.
    #[default]
    Bottom,
}

/// Ordered card pile. The front is the next card drawn.
///
/// ```
/// use ccg_duel::cards::{Card, MonsterCard};
/// use ccg_duel::core::{EntityId, PlayerId};
/// use ccg_duel::zones::{Deck, DeckPosition};
///
/// let owner = PlayerId::new(0);
/// let mut deck = Deck::new();
/// deck.add(MonsterCard::new(EntityId(1), owner, "A", 1, 1, 1).into(), DeckPosition::Bottom);
/// deck.add(MonsterCard::new(EntityId(2), owner, "B", 1, 1, 1).into(), DeckPosition::Top);
///
/// assert_eq!(deck.peek().map(Card::id), Some(EntityId(2)));
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck in the given order, first element on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Next card to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Add a card at the bottom.
    pub fn append(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add a card at a position.
    pub fn add(&mut self, card: Card, position: DeckPosition) {
        match position {
            DeckPosition::Top => self.cards.push_front(card),
            DeckPosition::Bottom => self.cards.push_back(card),
        }
    }

    /// Randomize order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
