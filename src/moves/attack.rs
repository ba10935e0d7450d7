//! Combat resolution.

use super::{AttackingMove, Target};
use crate::core::{MatchError, PlayerId};
use crate::events::{EventBus, GameEvent};
use crate::fighter::{exchange, Fighter};
use crate::game::MatchState;

pub(super) fn is_legal(mv: &AttackingMove, state: &MatchState, active: PlayerId) -> bool {
    let ready = state
        .player(active)
        .board
        .get(mv.attacker)
        .is_some_and(|m| m.can_attack());
    if !ready {
        return false;
    }

    let opponent = state.player(active.opponent());
    match mv.defender {
        // Any monster on the other side blocks the hero.
        Target::Hero(player) => player == opponent.id && opponent.board.is_empty(),
        Target::Monster(id) => opponent.board.get(id).is_some(),
    }
}

/// Simultaneous exchange between a board monster and its target.
///
/// The attacker is fatigued afterwards. Publishes `MonsterAttacking`, then
/// `MonsterDefending` or `HeroDefending`.
pub(super) fn resolve(
    mv: &AttackingMove,
    state: &mut MatchState,
    active: PlayerId,
    bus: &mut EventBus,
) -> Result<(), MatchError> {
    let (me, them) = state.players.pair_mut(active);

    let attacker = me.board.get_mut(mv.attacker).ok_or_else(|| {
        MatchError::invariant(format!("attacker {} is not on {}'s board", mv.attacker, active))
    })?;
    if !attacker.can_attack() {
        return Err(MatchError::invariant(format!(
            "attacker {} cannot attack this turn",
            mv.attacker
        )));
    }

    let (attacker_view, defender_view, defending) = match mv.defender {
        Target::Hero(player) => {
            if player != them.id {
                return Err(MatchError::invariant(format!(
                    "{active} attacked its own hero"
                )));
            }
            exchange(attacker, &mut them.hero);
            attacker.fatigued = true;
            (attacker.snapshot(), them.hero.snapshot(), DefenderKind::Hero)
        }
        Target::Monster(id) => {
            let defender = them.board.get_mut(id).ok_or_else(|| {
                MatchError::invariant(format!("defender {id} is not on {}'s board", them.id))
            })?;
            exchange(attacker, defender);
            attacker.fatigued = true;
            (attacker.snapshot(), defender.snapshot(), DefenderKind::Monster)
        }
    };

    tracing::debug!(
        attacker = %attacker_view.name,
        defender = %defender_view.name,
        attacker_hp = attacker_view.hitpoints,
        defender_hp = defender_view.hitpoints,
        "attack"
    );

    bus.publish(GameEvent::MonsterAttacking {
        attacker: attacker_view.clone(),
        defender: defender_view.clone(),
    });
    bus.publish(match defending {
        DefenderKind::Hero => GameEvent::HeroDefending {
            attacker: attacker_view,
            defender: defender_view,
        },
        DefenderKind::Monster => GameEvent::MonsterDefending {
            attacker: attacker_view,
            defender: defender_view,
        },
    });
    Ok(())
}

enum DefenderKind {
    Hero,
    Monster,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventKind, EventRecorder};
    use crate::game::state::fixtures::*;
    use crate::moves::Move;

    #[test]
    fn test_monster_exchange_is_simultaneous() {
        let mut state = empty_state();
        let mut bus = EventBus::new();
        let a = put_monster(&mut state, p0(), 3, 4);
        let d = put_monster(&mut state, p1(), 2, 3);

        Move::attack(a, Target::Monster(d))
            .make(&mut state, p0(), &mut bus)
            .unwrap();

        let attacker = state.players[p0()].board.get(a).unwrap();
        let defender = state.players[p1()].board.get(d).unwrap();
        assert_eq!(attacker.hitpoints, 4 - 2);
        assert_eq!(defender.hitpoints, 3 - 3);
        assert!(attacker.fatigued);
        // Dead defender stays until the turn loop sweeps.
        assert!(defender.is_dead());
    }

    #[test]
    fn test_hero_attack_events() {
        let mut state = empty_state();
        let mut bus = EventBus::new();
        let recorder = EventRecorder::attach(&mut bus);
        let a = put_monster(&mut state, p0(), 5, 1);

        Move::attack(a, Target::Hero(p1()))
            .make(&mut state, p0(), &mut bus)
            .unwrap();

        assert_eq!(state.players[p1()].hero.hitpoints, 25);
        // Heroes have no attack, so the attacker is untouched.
        assert_eq!(state.players[p0()].board.get(a).unwrap().hitpoints, 1);
        assert_eq!(
            recorder.kinds(),
            vec![EventKind::MonsterAttacking, EventKind::HeroDefending]
        );
    }

    #[test]
    fn test_monster_attack_events() {
        let mut state = empty_state();
        let mut bus = EventBus::new();
        let recorder = EventRecorder::attach(&mut bus);
        let a = put_monster(&mut state, p0(), 1, 5);
        let d = put_monster(&mut state, p1(), 1, 5);

        Move::attack(a, Target::Monster(d))
            .make(&mut state, p0(), &mut bus)
            .unwrap();

        let events = recorder.events();
        assert_eq!(
            recorder.kinds(),
            vec![EventKind::MonsterAttacking, EventKind::MonsterDefending]
        );
        match &events[1] {
            GameEvent::MonsterDefending { attacker, defender } => {
                assert_eq!(attacker.id, Some(a));
                assert_eq!(defender.id, Some(d));
                assert_eq!(defender.hitpoints, 4);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_hero_blocked_by_monster() {
        let mut state = empty_state();
        let a = put_monster(&mut state, p0(), 2, 2);
        put_monster(&mut state, p1(), 1, 1);

        assert!(!Move::attack(a, Target::Hero(p1())).is_legal(&state, p0()));
    }

    #[test]
    fn test_fatigued_attacker_is_invariant_failure() {
        let mut state = empty_state();
        let mut bus = EventBus::new();
        let a = put_monster(&mut state, p0(), 2, 2);
        let mv = Move::attack(a, Target::Hero(p1()));

        mv.make(&mut state, p0(), &mut bus).unwrap();
        let err = mv.make(&mut state, p0(), &mut bus).unwrap_err();

        assert!(matches!(err, MatchError::Invariant(_)));
        assert!(!mv.is_legal(&state, p0()));
    }

    #[test]
    fn test_missing_attacker_is_invariant_failure() {
        let mut state = empty_state();
        let mut bus = EventBus::new();
        let err = Move::attack(crate::core::EntityId(99), Target::Hero(p1()))
            .make(&mut state, p0(), &mut bus)
            .unwrap_err();
        assert!(matches!(err, MatchError::Invariant(_)));
    }
}
