//! Anything that can deal and receive combat damage.
//!
//! Heroes and board monsters both implement [`Fighter`]. Combat code talks
//! to this trait only, so an attack on a hero and an attack on a monster go
//! through the same exchange.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::events::FighterSnapshot;

/// Combat capability.
pub trait Fighter {
    /// Display name.
    fn name(&self) -> &str;

    /// Current hitpoints. May be negative after lethal damage.
    fn hitpoints(&self) -> i32;

    /// Damage dealt to the other side of an exchange.
    fn total_damage(&self) -> i32;

    /// Subtract hitpoints. No floor is applied.
    fn take_damage(&mut self, amount: i32);

    /// Card handle, for fighters that are cards.
    fn entity(&self) -> Option<EntityId> {
        None
    }

    /// Dead at zero or below.
    fn is_dead(&self) -> bool {
        self.hitpoints() <= 0
    }

    /// Event payload describing this fighter right now.
    fn snapshot(&self) -> FighterSnapshot {
        FighterSnapshot {
            id: self.entity(),
            name: self.name().to_string(),
            attack: self.total_damage(),
            hitpoints: self.hitpoints(),
        }
    }
}

/// Resolve one simultaneous combat exchange.
///
/// Both sides compute their outgoing damage before either takes any, so the
/// result does not depend on who is passed first.
///
/// ```
/// use ccg_duel::fighter::{exchange, Fighter, Hero};
///
/// let mut a = Hero::new("A", 30).with_attack(3);
/// let mut b = Hero::new("B", 30).with_attack(5);
/// exchange(&mut a, &mut b);
/// assert_eq!(a.hitpoints(), 25);
/// assert_eq!(b.hitpoints(), 27);
/// ```
pub fn exchange<A, D>(attacker: &mut A, defender: &mut D)
where
    A: Fighter + ?Sized,
    D: Fighter + ?Sized,
{
    let outgoing = attacker.total_damage();
    let incoming = defender.total_damage();
    defender.take_damage(outgoing);
    attacker.take_damage(incoming);
}

/// A player's hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub hitpoints: i32,
    /// Healing never raises hitpoints above this.
    pub max_hitpoints: i32,
    /// Heroes have no weapon in this ruleset; kept at zero unless set.
    pub attack: i32,
    /// Stored but not consulted by combat.
    pub armor: i32,
}

impl Hero {
    /// Create a hero at full health.
    pub fn new(name: impl Into<String>, hitpoints: i32) -> Self {
        Self {
            name: name.into(),
            hitpoints,
            max_hitpoints: hitpoints,
            attack: 0,
            armor: 0,
        }
    }

    /// Set attack (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    /// Set armor (builder pattern).
    #[must_use]
    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = armor;
        self
    }

    /// Restore hitpoints, capped at the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hitpoints;
        self.hitpoints = (self.hitpoints + amount.max(0)).min(self.max_hitpoints.max(before));
        self.hitpoints - before
    }
}

impl Fighter for Hero {
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
}
