//! Card instances - runtime card state.
//!
//! [`Card`] is the tagged union that lives in decks and hands. Once a
//! monster hits the board it is held as a bare [`MonsterCard`], so a board
//! can only ever contain monsters.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind, SpellEffect};
use crate::core::{EntityId, PlayerId};
use crate::events::CardSnapshot;
use crate::fighter::Fighter;

/// A monster card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCard {
    pub id: EntityId,
    pub owner: PlayerId,
    pub name: String,
    pub cost: u32,
    pub attack: i32,
    pub hitpoints: i32,
    /// Printed hitpoints; used when the card is reset.
    pub base_hitpoints: i32,
    /// Set when the monster enters the board.
    pub summoning_sick: bool,
    /// Set after the monster attacks.
    pub fatigued: bool,
}

impl MonsterCard {
    pub fn new(
        id: EntityId,
        owner: PlayerId,
        name: impl Into<String>,
        cost: u32,
        attack: i32,
        hitpoints: i32,
    ) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            cost,
            attack,
            hitpoints,
            base_hitpoints: hitpoints,
            summoning_sick: false,
            fatigued: false,
        }
    }

    /// Set summoning sickness (builder pattern).
    #[must_use]
    pub fn sick(mut self) -> Self {
        self.summoning_sick = true;
        self
    }

    /// Not sick, not fatigued, and hits for something.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.summoning_sick && !self.fatigued && self.attack > 0
    }

    /// Clear both readiness flags.
    pub fn ready(&mut self) {
        self.summoning_sick = false;
        self.fatigued = false;
    }

    /// Back to printed state, as if freshly drawn.
    pub fn reset(&mut self) {
        self.hitpoints = self.base_hitpoints;
        self.ready();
    }

    /// Event payload naming this card.
    #[must_use]
    pub fn card_snapshot(&self) -> CardSnapshot {
        CardSnapshot::new(self.id, &self.name)
    }
}

impl Fighter for MonsterCard {
    fn name(&self) -> &str {
        &self.name
    }

    fn hitpoints(&self) -> i32 {
        self.hitpoints
    }

    fn total_damage(&self) -> i32 {
        self.attack
    }

    fn take_damage(&mut self, amount: i32) {
        self.hitpoints -= amount;
    }

    fn entity(&self) -> Option<EntityId> {
        Some(self.id)
    }
}

impl std::fmt::Display for MonsterCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}/{}", self.name, self.cost, self.attack, self.hitpoints)?;
        if self.summoning_sick {
            f.write_str(" zZ")?;
        }
        Ok(())
    }
}

/// A spell card. Consumed when played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    pub id: EntityId,
    pub owner: PlayerId,
    pub name: String,
    pub cost: u32,
    pub effect: SpellEffect,
}

/// Mana bookkeeping carried by a [`ManaToken`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaModifier {
    /// Whose pool the bonus goes to.
    pub player: PlayerId,
    /// Extra available mana for the turn it is played.
    pub bonus: u32,
}

/// Bonus card for the player who acts second.
///
/// The modifier is attached at construction, so a token without its
/// bookkeeping cannot exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaToken {
    pub id: EntityId,
    pub owner: PlayerId,
    pub modifier: ManaModifier,
}

impl ManaToken {
    pub const NAME: &'static str = "Mana Token";

    /// A token worth one extra mana to `owner`.
    #[must_use]
    pub fn new(id: EntityId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            modifier: ManaModifier {
                player: owner,
                bonus: 1,
            },
        }
    }
}

/// Any card that can sit in a deck or hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Monster(MonsterCard),
    Spell(SpellCard),
    ManaToken(ManaToken),
}

impl Card {
    /// Instantiate a catalog definition.
    #[must_use]
    pub fn from_definition(def: &CardDefinition, id: EntityId, owner: PlayerId) -> Self {
        match &def.kind {
            CardKind::Monster { attack, hitpoints } => Card::Monster(MonsterCard::new(
                id, owner, &def.name, def.cost, *attack, *hitpoints,
            )),
            CardKind::Spell { effect } => Card::Spell(SpellCard {
                id,
                owner,
                name: def.name.clone(),
                cost: def.cost,
                effect: effect.clone(),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Card::Monster(m) => m.id,
            Card::Spell(s) => s.id,
            Card::ManaToken(t) => t.id,
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        match self {
            Card::Monster(m) => m.owner,
            Card::Spell(s) => s.owner,
            Card::ManaToken(t) => t.owner,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Monster(m) => &m.name,
            Card::Spell(s) => &s.name,
            Card::ManaToken(_) => ManaToken::NAME,
        }
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        match self {
            Card::Monster(m) => m.cost,
            Card::Spell(s) => s.cost,
            Card::ManaToken(_) => 0,
        }
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        matches!(self, Card::Monster(_))
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        matches!(self, Card::Spell(_))
    }

    #[must_use]
    pub fn is_mana_token(&self) -> bool {
        matches!(self, Card::ManaToken(_))
    }

    #[must_use]
    pub fn as_monster(&self) -> Option<&MonsterCard> {
        match self {
            Card::Monster(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot::new(self.id(), self.name())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Monster(m) => std::fmt::Display::fmt(m, f),
            Card::Spell(s) => write!(f, "{} ({}) {}", s.name, s.cost, s.effect),
            Card::ManaToken(t) => write!(f, "{} (0) +{}", ManaToken::NAME, t.modifier.bonus),
        }
    }
}

impl From<MonsterCard> for Card {
    fn from(monster: MonsterCard) -> Self {
        Card::Monster(monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    #[test]
    fn test_from_monster_definition() {
        let def = CardDefinition::monster("Frost Yeti", 4, 4, 5);
        let card = Card::from_definition(&def, EntityId(3), p0());

        assert!(card.is_monster());
        assert_eq!(card.id(), EntityId(3));
        assert_eq!(card.cost(), 4);
        let monster = card.as_monster().unwrap();
        assert_eq!(monster.attack, 4);
        assert_eq!(monster.hitpoints, 5);
        assert!(!monster.summoning_sick);
    }

    #[test]
    fn test_from_spell_definition() {
        let def = CardDefinition::spell("Healing Touch", 3, SpellEffect::Heal { amount: 8 });
        let card = Card::from_definition(&def, EntityId(1), p0());

        assert!(card.is_spell());
        assert_eq!(card.name(), "Healing Touch");
        assert!(card.as_monster().is_none());
    }

    #[test]
    fn test_mana_token_has_modifier() {
        let owner = PlayerId::new(1);
        let token = ManaToken::new(EntityId(9), owner);

        assert_eq!(token.modifier.player, owner);
        assert_eq!(token.modifier.bonus, 1);

        let card = Card::ManaToken(token);
        assert_eq!(card.cost(), 0);
        assert_eq!(card.name(), ManaToken::NAME);
        assert_eq!(card.owner(), owner);
    }

    #[test]
    fn test_can_attack() {
        let mut monster = MonsterCard::new(EntityId(0), p0(), "Raider", 1, 2, 1).sick();
        assert!(!monster.can_attack());

        monster.ready();
        assert!(monster.can_attack());

        monster.fatigued = true;
        assert!(!monster.can_attack());

        let wall = MonsterCard::new(EntityId(1), p0(), "Wall", 2, 0, 5);
        assert!(!wall.can_attack());
    }

    #[test]
    fn test_reset_restores_printed_state() {
        let mut monster = MonsterCard::new(EntityId(0), p0(), "Ogre", 6, 6, 7).sick();
        monster.take_damage(4);
        monster.fatigued = true;

        monster.reset();

        assert_eq!(monster.hitpoints, 7);
        assert!(monster.can_attack());
    }

    #[test]
    fn test_display() {
        let monster = MonsterCard::new(EntityId(0), p0(), "Raptor", 2, 3, 2);
        assert_eq!(monster.to_string(), "Raptor (2) 3/2");
        assert_eq!(monster.clone().sick().to_string(), "Raptor (2) 3/2 zZ");

        let token = Card::ManaToken(ManaToken::new(EntityId(1), p0()));
        assert_eq!(token.to_string(), "Mana Token (0) +1");
    }
}
