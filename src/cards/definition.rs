//! Card definitions - static card data.
//!
//! A `CardDefinition` is what the catalog knows about a card name: its cost
//! and whether it is a monster (attack and hitpoints) or a spell (an effect).
//! Runtime state such as damage taken or summoning sickness lives on the
//! instances in [`super::instance`].

use serde::{Deserialize, Serialize};

/// What a spell does when played.
///
/// "Caster" is the player who played the spell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpellEffect {
    /// The caster's hero regains hitpoints, up to its starting value.
    Heal { amount: i32 },
    /// The caster draws cards.
    Draw { amount: usize },
    /// The opponent discards random cards from hand.
    Discard { amount: usize },
    /// Fresh copies of a catalog card go to the bottom of the caster's deck.
    AddToDeck { card: String, copies: usize },
    /// The opponent's weakest monster goes back to their hand.
    ReturnToHand,
}

impl std::fmt::Display for SpellEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpellEffect::Heal { amount } => write!(f, "restore {amount} health"),
            SpellEffect::Draw { amount } => write!(f, "draw {amount}"),
            SpellEffect::Discard { amount } => write!(f, "opponent discards {amount}"),
            SpellEffect::AddToDeck { card, copies } => {
                write!(f, "shuffle {copies}x {card} into deck")
            }
            SpellEffect::ReturnToHand => f.write_str("return weakest enemy monster"),
        }
    }
}

/// Monster or spell payload of a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardKind {
    Monster { attack: i32, hitpoints: i32 },
    Spell { effect: SpellEffect },
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_duel::cards::{CardDefinition, CardKind};
///
/// let yeti = CardDefinition::monster("Frost Yeti", 4, 4, 5);
/// assert_eq!(yeti.cost, 4);
/// assert!(matches!(yeti.kind, CardKind::Monster { attack: 4, hitpoints: 5 }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique name; decks refer to cards by it.
    pub name: String,

    /// Mana cost.
    pub cost: u32,

    #[serde(flatten)]
    pub kind: CardKind,

    /// Flavor or rules text, shown only in logs.
    #[serde(default)]
    pub text: String,
}

impl CardDefinition {
    /// Create a monster definition.
    pub fn monster(name: impl Into<String>, cost: u32, attack: i32, hitpoints: i32) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Monster { attack, hitpoints },
            text: String::new(),
        }
    }

    /// Create a spell definition.
    pub fn spell(name: impl Into<String>, cost: u32, effect: SpellEffect) -> Self {
        Self {
            name: name.into(),
            cost,
            kind: CardKind::Spell { effect },
            text: String::new(),
        }
    }

    /// Set the text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self.kind, CardKind::Monster { .. })
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        matches!(self.kind, CardKind::Spell { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_from_toml() {
        let def: CardDefinition = toml::from_str(
            r#"
            name = "River Snapper"
            cost = 2
            kind = "monster"
            attack = 2
            hitpoints = 3
            "#,
        )
        .unwrap();

        assert_eq!(def, CardDefinition::monster("River Snapper", 2, 2, 3));
        assert!(def.is_monster());
    }

    #[test]
    fn test_spell_from_toml() {
        let def: CardDefinition = toml::from_str(
            r#"
            name = "Call Reinforcements"
            cost = 2
            kind = "spell"
            effect = { type = "add_to_deck", card = "River Snapper", copies = 2 }
            text = "Two more for the pile."
            "#,
        )
        .unwrap();

        assert!(def.is_spell());
        assert_eq!(
            def.kind,
            CardKind::Spell {
                effect: SpellEffect::AddToDeck {
                    card: "River Snapper".into(),
                    copies: 2
                }
            }
        );
        assert_eq!(def.text, "Two more for the pile.");
    }

    #[test]
    fn test_unit_effect_from_toml() {
        let def: CardDefinition = toml::from_str(
            r#"
            name = "Banish"
            cost = 2
            kind = "spell"
            effect = { type = "return_to_hand" }
            "#,
        )
        .unwrap();

        assert_eq!(
            def.kind,
            CardKind::Spell {
                effect: SpellEffect::ReturnToHand
            }
        );
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(SpellEffect::Heal { amount: 8 }.to_string(), "restore 8 health");
        assert_eq!(SpellEffect::Draw { amount: 2 }.to_string(), "draw 2");
    }
}
