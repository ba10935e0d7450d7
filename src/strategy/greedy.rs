//! Priority-based attacker.
//!
//! Tiers, checked in order across the whole legal set:
//!
//! 1. Lethal: an attack on the hero for at least its remaining hitpoints.
//! 2. Free trade: an attack that deals more than the defending monster's
//!    hitpoints while the attacker survives the return damage.
//! 3. Anything: uniform random choice.
//!
//! Within a tier the first move in validator order wins.

use super::Strategy;
use crate::core::{GameRng, PlayerId};
use crate::fighter::Fighter;
use crate::game::MatchState;
use crate::moves::{AttackingMove, Move, Target};

#[derive(Clone, Debug, Default)]
pub struct GreedyStrategy {
    moves: Vec<Move>,
    lethal: Option<Move>,
    free_trade: Option<Move>,
}

impl GreedyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn classify(state: &MatchState, active: PlayerId, opponent: PlayerId, mv: &AttackingMove) -> Tier {
        let Some(attacker) = state.player(active).board.get(mv.attacker) else {
            return Tier::Other;
        };
        let them = state.player(opponent);

        match mv.defender {
            Target::Hero(_) => {
                if attacker.total_damage() >= them.hero.hitpoints() {
                    Tier::Lethal
                } else {
                    Tier::Other
                }
            }
            Target::Monster(id) => match them.board.get(id) {
                Some(defender)
                    if attacker.hitpoints() > defender.total_damage()
                        && attacker.total_damage() > defender.hitpoints() =>
                {
                    Tier::FreeTrade
                }
                _ => Tier::Other,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tier {
    Lethal,
    FreeTrade,
    Other,
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn set_possible_moves(
        &mut self,
        state: &MatchState,
        active: PlayerId,
        opponent: PlayerId,
        moves: &[Move],
    ) {
        self.moves = moves.to_vec();
        self.lethal = None;
        self.free_trade = None;

        for mv in moves {
            let Move::Attack(attack) = mv else {
                continue;
            };
            match Self::classify(state, active, opponent, attack) {
                Tier::Lethal if self.lethal.is_none() => self.lethal = Some(*mv),
                Tier::FreeTrade if self.free_trade.is_none() => self.free_trade = Some(*mv),
                _ => {}
            }
        }
    }

    fn next_move(&mut self, rng: &mut GameRng) -> Option<Move> {
        if let Some(mv) = self.lethal.or(self.free_trade) {
            return Some(mv);
        }
        rng.choose_index(self.moves.len()).map(|i| self.moves[i])
    }
}
