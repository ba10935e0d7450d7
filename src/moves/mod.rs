//! Moves: the actions a player can take during their turn.
//!
//! A [`Move`] is a closed tagged union. Each variant knows how to check its
//! own legality ([`Move::is_legal`]) and how to apply itself
//! ([`Move::make`]). Cards are referred to by [`EntityId`], so a move is a
//! small `Copy` value that never borrows match state.
//!
//! The [`MoveValidator`] enumerates legal moves; strategies pick one; the
//! turn loop calls `make`.

pub mod attack;
pub mod play;
pub mod validator;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EntityId, MatchError, PlayerId};
use crate::events::EventBus;
use crate::game::MatchState;

pub use validator::MoveValidator;

/// Legal-move list. A turn rarely offers more than a handful.
pub type MoveList = SmallVec<[Move; 16]>;

/// Who an attack hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// A player's hero.
    Hero(PlayerId),
    /// A monster on the opposing board.
    Monster(EntityId),
}

/// A board monster attacking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackingMove {
    pub attacker: EntityId,
    pub defender: Target,
}

/// A single action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Attack(AttackingMove),
    /// Monster from hand to board.
    PlayMonster { card: EntityId },
    /// Spell from hand; consumed.
    PlaySpell { card: EntityId },
    /// Bonus mana token from hand; consumed.
    PlayManaToken { card: EntityId },
}

impl Move {
    /// Shorthand for an attack.
    #[must_use]
    pub fn attack(attacker: EntityId, defender: Target) -> Self {
        Move::Attack(AttackingMove { attacker, defender })
    }

    /// Check the move against the current state, for `active`.
    #[must_use]
    pub fn is_legal(&self, state: &MatchState, active: PlayerId) -> bool {
        match self {
            Move::Attack(mv) => attack::is_legal(mv, state, active),
            Move::PlayMonster { card } => play::monster_is_legal(*card, state, active),
            Move::PlaySpell { card } => play::spell_is_legal(*card, state, active),
            Move::PlayManaToken { card } => play::token_is_legal(*card, state, active),
        }
    }

    /// Apply the move, publishing what happened.
    ///
    /// Dead monsters are left on the board; the turn loop sweeps them.
    /// A move whose cards are not where it expects is an invariant failure.
    pub fn make(
        &self,
        state: &mut MatchState,
        active: PlayerId,
        bus: &mut EventBus,
    ) -> Result<(), MatchError> {
        match self {
            Move::Attack(mv) => attack::resolve(mv, state, active, bus),
            Move::PlayMonster { card } => play::play_monster(*card, state, active, bus),
            Move::PlaySpell { card } => play::play_spell(*card, state, active, bus),
            Move::PlayManaToken { card } => play::play_mana_token(*card, state, active, bus),
        }
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Move::Attack(_))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Attack(AttackingMove {
                attacker,
                defender: Target::Hero(player),
            }) => write!(f, "attack {attacker} -> hero of {player}"),
            Move::Attack(AttackingMove {
                attacker,
                defender: Target::Monster(defender),
            }) => write!(f, "attack {attacker} -> {defender}"),
            Move::PlayMonster { card } => write!(f, "play monster {card}"),
            Move::PlaySpell { card } => write!(f, "cast {card}"),
            Move::PlayManaToken { card } => write!(f, "use mana token {card}"),
        }
    }
}
