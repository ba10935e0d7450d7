//! Card system: definitions, catalog, instances, deck building.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data (cost, monster stats or spell effect)
//! - `CardCatalog`: Definition lookup by name
//! - `Card`: Runtime card in a deck or hand (`MonsterCard`, `SpellCard`, `ManaToken`)
//! - `DeckBuilder`: Names to shuffled `Deck`

pub mod catalog;
pub mod deck_builder;
pub mod definition;
pub mod instance;
pub mod render;

pub use catalog::{CardCatalog, MAX_EFFECT_AMOUNT};
pub use deck_builder::DeckBuilder;
pub use definition::{CardDefinition, CardKind, SpellEffect};
pub use instance::{Card, ManaModifier, ManaToken, MonsterCard, SpellCard};
pub use render::render_cards;
