//! Turn a list of card names into a shuffled deck.

use super::catalog::CardCatalog;
use crate::core::{ConfigError, EntityAllocator, GameRng, PlayerId};
use crate::zones::Deck;

/// Builds decks from catalog names.
///
/// ```
/// use ccg_duel::cards::{CardCatalog, DeckBuilder};
/// use ccg_duel::core::{EntityAllocator, GameRng, PlayerId};
///
/// let catalog = CardCatalog::builtin().unwrap();
/// let names = vec!["Frost Yeti".to_string(), "Banish".to_string()];
///
/// let deck = DeckBuilder::new(&catalog)
///     .build(&names, PlayerId::new(0), &mut EntityAllocator::new(), &mut GameRng::new(1))
///     .unwrap();
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a CardCatalog,
    shuffle: bool,
}

impl<'a> DeckBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            catalog,
            shuffle: true,
        }
    }

    /// Keep the listed order instead of shuffling (builder pattern).
    #[must_use]
    pub fn in_order(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Instantiate every name for `owner`.
    ///
    /// Fails on the first unknown name, before any card is created.
    pub fn build(
        &self,
        names: &[String],
        owner: PlayerId,
        ids: &mut EntityAllocator,
        rng: &mut GameRng,
    ) -> Result<Deck, ConfigError> {
        if let Some(unknown) = names.iter().find(|n| !self.catalog.contains(n)) {
            return Err(ConfigError::UnknownCard(unknown.clone()));
        }

        let cards = names
            .iter()
            .map(|name| self.catalog.instantiate(name, ids.alloc(), owner))
            .collect::<Result<Vec<_>, _>>()?;

        let mut deck = Deck::from_cards(cards);
        if self.shuffle {
            deck.shuffle(rng);
        }
        tracing::debug!(player = %owner, cards = deck.len(), "deck built");
        Ok(deck)
    }
}
