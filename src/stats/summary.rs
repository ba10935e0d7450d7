//! Per-player counters and the end-of-match summary.

use serde::{Deserialize, Serialize};

use crate::core::{MatchOutcome, PlayerId};

/// Counters for one seat. Every field only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub seat: u8,
    pub name: String,

    pub turns_taken: u32,

    pub cards_naturally_drawn: u32,
    pub cards_force_drawn: u32,
    pub fatigue_damage_taken: i64,

    pub cards_played: u32,
    pub monsters_played: u32,
    pub spells_played: u32,
    pub cards_discarded: u32,
    pub cards_added_to_deck: u32,
    pub cards_returned_to_hand: u32,
    pub monsters_lost: u32,

    pub monster_damage_done: i64,
    pub monster_damage_taken: i64,
    pub hero_damage_done: i64,
    pub hero_damage_taken: i64,
    pub hero_healing: i64,

    pub mana_available: u64,
    pub mana_used: u64,
}

impl PlayerStats {
    /// Empty row for a seat.
    pub fn new(seat: PlayerId, name: impl Into<String>) -> Self {
        Self {
            seat: seat.0,
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Result of one match, ready to serialize.
///
/// ```json
/// { "turnsPlayed": 14, "winningPlayer": "Alice", "playerStats": [ ... ] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub turns_played: u32,
    /// Winner's display name, or [`MatchSummary::TIE`].
    pub winning_player: String,
    /// One row per seat, in seat order.
    pub player_stats: Vec<PlayerStats>,
    #[serde(skip)]
    pub outcome: Option<MatchOutcome>,
}

impl MatchSummary {
    pub const TIE: &'static str = "TIE";

    /// Row for a seat.
    #[must_use]
    pub fn stats(&self, seat: PlayerId) -> Option<&PlayerStats> {
        self.player_stats.iter().find(|row| row.seat == seat.0)
    }

    /// Decided by the recorded outcome, never by the display name, so a
    /// winner named `"TIE"` still counts as a win.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self.outcome, Some(MatchOutcome::Tie))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_output() {
        let summary = MatchSummary {
            turns_played: 9,
            winning_player: "Alice".into(),
            player_stats: vec![PlayerStats::new(PlayerId::new(0), "Alice")],
            outcome: Some(MatchOutcome::Winner(PlayerId::new(0))),
        };

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["turnsPlayed"], 9);
        assert_eq!(json["winningPlayer"], "Alice");
        assert_eq!(json["playerStats"][0]["cardsNaturallyDrawn"], 0);
        assert_eq!(json["playerStats"][0]["seat"], 0);
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn test_lookup_by_seat() {
        let summary = MatchSummary {
            turns_played: 1,
            winning_player: MatchSummary::TIE.into(),
            player_stats: vec![
                PlayerStats::new(PlayerId::new(0), "Same"),
                PlayerStats::new(PlayerId::new(1), "Same"),
            ],
            outcome: Some(MatchOutcome::Tie),
        };

        assert!(summary.is_tie());
        assert_eq!(summary.stats(PlayerId::new(1)).map(|r| r.seat), Some(1));
    }

    #[test]
    fn test_winner_named_tie_is_not_a_tie() {
        let summary = MatchSummary {
            turns_played: 4,
            winning_player: "TIE".into(),
            player_stats: vec![
                PlayerStats::new(PlayerId::new(0), "TIE"),
                PlayerStats::new(PlayerId::new(1), "Bob"),
            ],
            outcome: Some(MatchOutcome::Winner(PlayerId::new(0))),
        };

        assert!(!summary.is_tie());
    }
}
