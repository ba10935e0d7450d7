//! Card catalog for definition lookup.
//!
//! The `CardCatalog` maps card names to definitions. Decks in match input
//! files are lists of names, so every name must resolve here before a
//! match can start.
//!
//! A built-in catalog ships with the crate (`data/cards.toml`); a custom
//! one uses the same format:
//!
//! ```toml
//! [[cards]]
//! name = "Frost Yeti"
//! cost = 4
//! kind = "monster"
//! attack = 4
//! hitpoints = 5
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{CardDefinition, CardKind, SpellEffect};
use super::instance::Card;
use crate::core::{ConfigError, EntityId, PlayerId};

const BUILTIN_CATALOG: &str = include_str!("../../data/cards.toml");

/// Upper bound for spell draw, discard and copy counts.
pub const MAX_EFFECT_AMOUNT: usize = 30;

#[derive(Deserialize)]
struct CatalogFile {
    cards: Vec<CardDefinition>,
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use ccg_duel::cards::{CardCatalog, CardDefinition};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::monster("Frost Yeti", 4, 4, 5)).unwrap();
///
/// let found = catalog.get("Frost Yeti").unwrap();
/// assert_eq!(found.cost, 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
    /// Registration order, for deterministic iteration.
    order: Vec<String>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| ConfigError::Toml {
            origin: origin.to_string(),
            source,
        })?;

        let mut catalog = Self::new();
        for card in file.cards {
            catalog.register(card)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// Register a card definition. Names must be unique.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), ConfigError> {
        if self.cards.contains_key(&card.name) {
            return Err(ConfigError::DuplicateCard(card.name));
        }
        self.order.push(card.name.clone());
        self.cards.insert(card.name.clone(), card);
        Ok(())
    }

    /// Check cross-references and stat ranges.
    ///
    /// Spells must cost at least one mana; with a finite mana pool this
    /// bounds how many spells a single turn can chain. Draw, discard and
    /// copy counts are capped at [`MAX_EFFECT_AMOUNT`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for card in self.iter() {
            match &card.kind {
                CardKind::Monster { attack, hitpoints } => {
                    if *hitpoints <= 0 || *attack < 0 {
                        return Err(ConfigError::Invalid(format!(
                            "monster '{}' needs hitpoints > 0 and attack >= 0",
                            card.name
                        )));
                    }
                }
                CardKind::Spell { effect } => {
                    if card.cost == 0 {
                        return Err(ConfigError::Invalid(format!(
                            "spell '{}' must cost at least 1",
                            card.name
                        )));
                    }
                    let amount = match effect {
                        SpellEffect::Heal { amount } => {
                            if *amount <= 0 {
                                return Err(ConfigError::Invalid(format!(
                                    "spell '{}' must heal a positive amount",
                                    card.name
                                )));
                            }
                            None
                        }
                        SpellEffect::Draw { amount } | SpellEffect::Discard { amount } => {
                            Some(*amount)
                        }
                        SpellEffect::AddToDeck {
                            card: target,
                            copies,
                        } => {
                            if !self.contains(target) {
                                return Err(ConfigError::UnknownCard(target.clone()));
                            }
                            Some(*copies)
                        }
                        SpellEffect::ReturnToHand => None,
                    };
                    if amount.is_some_and(|n| n > MAX_EFFECT_AMOUNT) {
                        return Err(ConfigError::Invalid(format!(
                            "spell '{}' exceeds the effect limit of {MAX_EFFECT_AMOUNT}",
                            card.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |name| self.cards.get(name))
    }

    /// Create a runtime card from a name.
    pub fn instantiate(
        &self,
        name: &str,
        id: EntityId,
        owner: PlayerId,
    ) -> Result<Card, ConfigError> {
        let def = self
            .get(name)
            .ok_or_else(|| ConfigError::UnknownCard(name.to_string()))?;
        Ok(Card::from_definition(def, id, owner))
    }
}
