//! Monsters in play.

use serde::{Deserialize, Serialize};

use crate::cards::MonsterCard;
use crate::core::EntityId;
use crate::fighter::Fighter;

/// Ordered row of monsters a player controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    monsters: Vec<MonsterCard>,
    limit: usize,
}

impl Board {
    /// Create an empty board holding at most `limit` monsters.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            monsters: Vec::new(),
            limit,
        }
    }

    /// Place a monster at the right end. A full board hands it back.
    pub fn place(&mut self, monster: MonsterCard) -> Result<(), MonsterCard> {
        if self.is_full() {
            return Err(monster);
        }
        self.monsters.push(monster);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&MonsterCard> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut MonsterCard> {
        self.monsters.iter_mut().find(|m| m.id == id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<MonsterCard> {
        let index = self.monsters.iter().position(|m| m.id == id)?;
        Some(self.monsters.remove(index))
    }

    /// Remove every dead monster, keeping survivors in order.
    ///
    /// Returns the removed monsters. Calling it again with no new damage
    /// returns nothing and leaves the board as it was.
    pub fn sweep_dead(&mut self) -> Vec<MonsterCard> {
        let (dead, alive): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.monsters).into_iter().partition(MonsterCard::is_dead);
        self.monsters = alive;
        dead
    }

    /// Clear summoning sickness and attack fatigue on every monster.
    pub fn ready_all(&mut self) {
        for monster in &mut self.monsters {
            monster.ready();
        }
    }

    /// Lowest attack, then lowest hitpoints; earliest wins ties.
    #[must_use]
    pub fn weakest(&self) -> Option<&MonsterCard> {
        self.monsters
            .iter()
            .enumerate()
            .min_by_key(|(index, m)| (m.attack, m.hitpoints, *index))
            .map(|(_, m)| m)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.monsters.len() >= self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Iterate left to right.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterCard> {
        self.monsters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MonsterCard> {
        self.monsters.iter_mut()
    }
}
