//! Final result of a match.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Both heroes died together, or the turn cap was reached with both alive.
    ///
    /// A capped match is never awarded to the first seat by default; with
    /// both heroes standing nobody wins.
    Tie,
}

impl MatchOutcome {
    /// Decide the outcome from each hero's death state.
    ///
    /// ```
    /// use ccg_duel::core::{MatchOutcome, PlayerId};
    ///
    /// let p0 = PlayerId::new(0);
    /// let p1 = PlayerId::new(1);
    /// assert_eq!(MatchOutcome::from_deaths(false, true), MatchOutcome::Winner(p0));
    /// assert_eq!(MatchOutcome::from_deaths(true, false), MatchOutcome::Winner(p1));
    /// assert_eq!(MatchOutcome::from_deaths(true, true), MatchOutcome::Tie);
    /// ```
    #[must_use]
    pub fn from_deaths(seat0_dead: bool, seat1_dead: bool) -> Self {
        match (seat0_dead, seat1_dead) {
            (false, true) => MatchOutcome::Winner(PlayerId::new(0)),
            (true, false) => MatchOutcome::Winner(PlayerId::new(1)),
            _ => MatchOutcome::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchOutcome::Winner(p) if *p == player)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Winner(p) => Some(*p),
            MatchOutcome::Tie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let result = MatchOutcome::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let tie = MatchOutcome::Tie;
        assert!(!tie.is_winner(PlayerId::new(0)));
        assert!(!tie.is_winner(PlayerId::new(1)));
        assert_eq!(tie.winner(), None);
    }

    #[test]
    fn test_both_alive_is_tie() {
        assert_eq!(MatchOutcome::from_deaths(false, false), MatchOutcome::Tie);
    }
}
