//! A player's hand.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::EntityId;

/// Bounded collection of cards in hand.
///
/// Order is kept (insertion order) so move enumeration is deterministic,
/// but nothing depends on it beyond that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    limit: usize,
}

impl Hand {
    /// Create an empty hand holding at most `limit` cards.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            cards: Vec::new(),
            limit,
        }
    }

    /// Add a card. A full hand hands the card back.
    pub fn add(&mut self, card: Card) -> Result<(), Card> {
        if self.is_full() {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove a card by handle.
    pub fn remove(&mut self, id: EntityId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    /// Remove the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.limit
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
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::MonsterCard;
    use crate::core::PlayerId;

    fn card(id: u32) -> Card {
        MonsterCard::new(EntityId(id), PlayerId::new(0), "M", 1, 1, 1).into()
    }

    #[test]
    fn test_add_until_full() {
        let mut hand = Hand::new(2);
        assert!(hand.add(card(1)).is_ok());
        assert!(hand.add(card(2)).is_ok());
        assert!(hand.is_full());

        let rejected = hand.add(card(3)).unwrap_err();
        assert_eq!(rejected.id(), EntityId(3));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut hand = Hand::new(10);
        hand.add(card(1)).unwrap();
        hand.add(card(2)).unwrap();

        assert_eq!(hand.remove(EntityId(1)).map(|c| c.id()), Some(EntityId(1)));
        assert!(!hand.contains(EntityId(1)));
        assert!(hand.remove(EntityId(1)).is_none());
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut hand = Hand::new(10);
        hand.add(card(1)).unwrap();

        assert!(hand.remove_at(5).is_none());
        assert!(hand.remove_at(0).is_some());
        assert!(hand.is_empty());
    }
}
