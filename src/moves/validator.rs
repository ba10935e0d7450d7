//! Legal-move enumeration.

use super::{Move, MoveList, Target};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::MatchState;

/// Enumerates the active player's legal moves.
///
/// Order is fixed for a given state: attacks first (board order, then target
/// order), then card plays in hand order. Results describe one state only and
/// must be recomputed after every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveValidator;

impl MoveValidator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every legal move for `active` right now.
    #[must_use]
    pub fn valid_moves(&self, state: &MatchState, active: PlayerId) -> MoveList {
        let mut moves = MoveList::new();
        self.attacks(state, active, &mut moves);
        self.plays(state, active, &mut moves);
        moves
    }

    fn attacks(&self, state: &MatchState, active: PlayerId, out: &mut MoveList) {
        let me = state.player(active);
        let opponent = state.player(active.opponent());

        for attacker in me.board.iter().filter(|m| m.can_attack()) {
            if opponent.board.is_empty() {
                out.push(Move::attack(attacker.id, Target::Hero(opponent.id)));
            } else {
                for defender in opponent.board.iter() {
                    out.push(Move::attack(attacker.id, Target::Monster(defender.id)));
                }
            }
        }
    }

    fn plays(&self, state: &MatchState, active: PlayerId, out: &mut MoveList) {
        let me = state.player(active);

        for card in me.hand.iter() {
            match card {
                Card::Monster(m) if m.cost <= me.available_mana && !me.board.is_full() => {
                    out.push(Move::PlayMonster { card: m.id });
                }
                Card::Spell(s) if s.cost <= me.available_mana => {
                    out.push(Move::PlaySpell { card: s.id });
                }
                Card::ManaToken(t) => out.push(Move::PlayManaToken { card: t.id }),
                _ => {}
            }
        }
    }
}
