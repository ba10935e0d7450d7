//! Turn loop tests.
//!
//! These drive whole matches, or single rounds of an arranged match,
//! through the public API:
//! - Opening hands and the mana token
//! - Lethal attacks ending the match
//! - Fatigue on an empty deck
//! - Ties from double death and from the turn cap

use ccg_duel::cards::{Card, MonsterCard};
use ccg_duel::core::{MatchConfig, MatchOutcome, PlayerId};
use ccg_duel::events::{EventKind, EventRecorder, GameEvent};
use ccg_duel::game::{Match, MatchBuilder, MatchPhase, PlayerSetup};
use ccg_duel::strategy::StrategyKind;

fn deck(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn repeated(name: &str, copies: usize) -> Vec<String> {
    vec![name.to_string(); copies]
}

fn arranged(config: MatchConfig, first: Vec<String>, second: Vec<String>) -> Match {
    MatchBuilder::new(config)
        .player(PlayerSetup::new("Alice", first, StrategyKind::Greedy))
        .player(PlayerSetup::new("Bob", second, StrategyKind::Greedy))
        .first_player(PlayerId::new(0))
        .without_shuffle()
        .build()
        .expect("match should build")
}

fn play_out(game: &mut Match) {
    while game.phase() != MatchPhase::MatchOver {
        game.play_round().expect("round should complete");
    }
}

/// Test the opening hands: 3 for the first player, 4 plus the token for the second.
#[test]
fn test_opening_hands() {
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let mut game = MatchBuilder::new(MatchConfig::default().with_seed(5))
        .player(PlayerSetup::new("Alice", repeated("Fen Raptor", 10), StrategyKind::Greedy))
        .player(PlayerSetup::new("Bob", repeated("Frost Yeti", 10), StrategyKind::Random))
        .first_player(p1)
        .build()
        .unwrap();

    game.setup().unwrap();

    let state = game.state();
    assert_eq!(game.first_player(), Some(p1));
    assert_eq!(state.player(p1).hand.len(), 3);
    assert_eq!(state.player(p1).deck.len(), 7);
    assert_eq!(state.player(p0).hand.len(), 5);
    assert_eq!(state.player(p0).deck.len(), 6);

    let tokens: Vec<_> = state
        .player(p0)
        .hand
        .iter()
        .filter_map(|card| match card {
            Card::ManaToken(token) => Some(token),
            _ => None,
        })
        .collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].modifier.player, p0);
    assert_eq!(tokens[0].modifier.bonus, 1);
    assert!(state.player(p1).hand.iter().all(|card| !card.is_mana_token()));
}

/// Test that the coin flip picks a seat and is reproducible under a seed.
#[test]
fn test_first_player_is_seeded() {
    let pick = |seed| {
        let mut game = MatchBuilder::new(MatchConfig::default().with_seed(seed))
            .player(PlayerSetup::new("Alice", repeated("Fen Raptor", 5), StrategyKind::Greedy))
            .player(PlayerSetup::new("Bob", repeated("Fen Raptor", 5), StrategyKind::Greedy))
            .build()
            .unwrap();
        assert_eq!(game.first_player(), None);
        game.setup().unwrap();
        game.first_player().unwrap()
    };

    assert_eq!(pick(11), pick(11));
    let seats: std::collections::HashSet<_> = (0..32).map(pick).collect();
    assert_eq!(seats.len(), 2);
}

/// A 30-attack monster facing an empty board kills a 30 hitpoint hero this turn.
#[test]
fn test_lethal_attack_ends_match() {
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let mut game = arranged(
        MatchConfig::default().with_seed(1),
        repeated("Marsh Raider", 10),
        repeated("Marsh Raider", 10),
    );
    game.setup().unwrap();

    let state = game.state_mut();
    let id = state.ids.alloc();
    state
        .player_mut(p0)
        .board
        .place(MonsterCard::new(id, p0, "Colossus", 10, 30, 30))
        .unwrap();

    let recorder = EventRecorder::attach(game.bus_mut());
    game.play_round().unwrap();

    assert_eq!(game.phase(), MatchPhase::MatchOver);
    assert!(game.state().player(p1).hero.hitpoints <= 0);
    assert_eq!(game.state().outcome(), MatchOutcome::Winner(p0));

    let summary = game.summary();
    assert_eq!(summary.winning_player, "Alice");
    assert_eq!(summary.turns_played, 1);
    assert_eq!(summary.stats(p1).unwrap().turns_taken, 0);

    // Bob never got a turn
    let begins: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::BeginTurn { player, .. } => Some(player),
            _ => None,
        })
        .collect();
    assert_eq!(begins, vec![p0]);

    let kinds = recorder.kinds();
    let tail = &kinds[kinds.len() - 2..];
    assert_eq!(tail, &[EventKind::FinalTurnCount, EventKind::WinnerDecided]);
}

/// Test fatigue: each draw from an empty deck hurts one more than the last.
#[test]
fn test_fatigue_escalates() {
    let p0 = PlayerId::new(0);
    let mut game = arranged(MatchConfig::default().with_seed(2), Vec::new(), repeated("Fen Raptor", 10));
    let recorder = EventRecorder::attach(game.bus_mut());

    game.setup().unwrap();
    assert!(game.state().player(p0).hand.is_empty());
    assert_eq!(game.state().player(p0).hero.hitpoints, 30 - (1 + 2 + 3));

    game.play_round().unwrap();
    assert_eq!(game.state().player(p0).hero.hitpoints, 30 - (1 + 2 + 3 + 4));
    assert!(game.state().player(p0).hand.is_empty());

    let damage: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::CardFatigueDamage { player, damage, .. } if player == p0 => Some(damage),
            _ => None,
        })
        .collect();
    assert_eq!(damage, vec![1, 2, 3, 4]);
    assert_eq!(game.summary().stats(p0).unwrap().fatigue_damage_taken, 10);
}

/// Empty decks on both sides: fatigue alone decides the match.
#[test]
fn test_fatigue_only_match_finishes() {
    let mut game = arranged(MatchConfig::default().with_seed(3), Vec::new(), Vec::new());
    game.setup().unwrap();
    play_out(&mut game);

    let outcome = game.state().outcome();
    let summary = game.summary();
    assert_eq!(summary.outcome, Some(outcome));
    assert!(summary.turns_played < 20);
}

/// Both heroes dead at once is a tie.
#[test]
fn test_double_death_is_tie() {
    let mut game = arranged(
        MatchConfig::default().with_seed(4),
        repeated("Fen Raptor", 10),
        repeated("Fen Raptor", 10),
    );
    game.setup().unwrap();
    for seat in PlayerId::all() {
        game.state_mut().player_mut(seat).hero.hitpoints = 0;
    }

    game.play_round().unwrap();

    assert_eq!(game.phase(), MatchPhase::MatchOver);
    let summary = game.summary();
    assert!(summary.is_tie());
    assert_eq!(summary.winning_player, "TIE");
    assert_eq!(summary.outcome, Some(MatchOutcome::Tie));
}

/// Nobody can attack with 0-attack monsters, so the cap ends the match in a tie.
#[test]
fn test_turn_cap_is_tie() {
    let config = MatchConfig::default().with_seed(5).with_max_turns(6);
    let mut game = arranged(config, repeated("Shield Bearer", 20), repeated("Shield Bearer", 20));
    game.setup().unwrap();
    play_out(&mut game);

    let summary = game.summary();
    assert_eq!(summary.turns_played, 6);
    assert!(summary.is_tie());
    assert_eq!(summary.outcome, Some(MatchOutcome::Tie));
    assert_eq!(summary.winning_player, "TIE");
    for seat in PlayerId::all() {
        assert_eq!(game.state().player(seat).hero.hitpoints, 30);
        assert_eq!(summary.stats(seat).unwrap().turns_taken, 6);
    }
}

/// Cleanup readies only the active player's board.
#[test]
fn test_cleanup_readies_active_board_only() {
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let mut game = arranged(
        MatchConfig::default().with_seed(6),
        repeated("Shield Bearer", 10),
        repeated("Shield Bearer", 10),
    );
    game.setup().unwrap();

    let state = game.state_mut();
    let mine = state.ids.alloc();
    let theirs = state.ids.alloc();
    state
        .player_mut(p0)
        .board
        .place(MonsterCard::new(mine, p0, "Sleeper", 1, 0, 3).sick())
        .unwrap();
    state
        .player_mut(p1)
        .board
        .place(MonsterCard::new(theirs, p1, "Sleeper", 1, 0, 3).sick())
        .unwrap();

    game.play_turn(p0).unwrap();

    assert!(!game.state().player(p0).board.get(mine).unwrap().summoning_sick);
    assert!(game.state().player(p1).board.get(theirs).unwrap().summoning_sick);
}

/// Mana grows by one per turn up to the maximum.
#[test]
fn test_mana_grows_to_cap() {
    let p0 = PlayerId::new(0);
    let config = MatchConfig::default().with_seed(7).with_max_turns(12);
    let mut game = arranged(config, repeated("Shield Bearer", 30), repeated("Shield Bearer", 30));
    let recorder = EventRecorder::attach(game.bus_mut());
    game.setup().unwrap();
    play_out(&mut game);

    let available: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::RecordManaAvailable { player, amount } if player == p0 => Some(amount),
            _ => None,
        })
        .collect();
    assert_eq!(available, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10]);
}

/// Same seed, same match.
#[test]
fn test_seeded_match_is_reproducible() {
    let run = || {
        MatchBuilder::new(MatchConfig::default().with_seed(99))
            .player(PlayerSetup::new(
                "Alice",
                deck(&["Fen Raptor", "Frost Yeti", "Mind Rot", "Banish", "Core Hound"]),
                StrategyKind::Random,
            ))
            .player(PlayerSetup::new(
                "Bob",
                deck(&["Magma Brute", "Healing Touch", "Call Reinforcements", "Stone Ogre"]),
                StrategyKind::Greedy,
            ))
            .build()
            .unwrap()
            .run()
            .unwrap()
    };

    assert_eq!(run(), run());
}

/// Test that setup problems surface from `build`, before any turn.
#[test]
fn test_build_rejects_bad_setup() {
    let unknown = MatchBuilder::new(MatchConfig::default())
        .player(PlayerSetup::new("Alice", deck(&["Dragon"]), StrategyKind::Greedy))
        .player(PlayerSetup::new("Bob", Vec::new(), StrategyKind::Greedy))
        .build();
    assert!(unknown.is_err());

    let lonely = MatchBuilder::new(MatchConfig::default())
        .player(PlayerSetup::new("Alice", Vec::new(), StrategyKind::Greedy))
        .build();
    assert!(lonely.is_err());

    let no_turns = MatchBuilder::new(MatchConfig::default().with_max_turns(0))
        .player(PlayerSetup::new("Alice", Vec::new(), StrategyKind::Greedy))
        .player(PlayerSetup::new("Bob", Vec::new(), StrategyKind::Greedy))
        .build();
    assert!(no_turns.is_err());
}
