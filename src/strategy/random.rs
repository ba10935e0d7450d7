//! Uniform random choice.

use super::Strategy;
use crate::core::{GameRng, PlayerId};
use crate::game::MatchState;
use crate::moves::Move;

/// Picks a uniformly random legal move.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy {
    moves: Vec<Move>,
}

impl RandomStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn set_possible_moves(
        &mut self,
        _state: &MatchState,
        _active: PlayerId,
        _opponent: PlayerId,
        moves: &[Move],
    ) {
        self.moves = moves.to_vec();
    }

    fn next_move(&mut self, rng: &mut GameRng) -> Option<Move> {
        rng.choose_index(self.moves.len()).map(|i| self.moves[i])
    }
}
