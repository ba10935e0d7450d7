//! Playing cards from hand: monsters, spells and the mana token.

use crate::cards::{Card, SpellCard, SpellEffect};
use crate::core::{EntityId, MatchError, PlayerId};
use crate::events::{EventBus, GameEvent};
use crate::game::MatchState;
use crate::player::DrawReason;

pub(super) fn monster_is_legal(card: EntityId, state: &MatchState, active: PlayerId) -> bool {
    let player = state.player(active);
    match player.hand.get(card) {
        Some(Card::Monster(m)) => m.cost <= player.available_mana && !player.board.is_full(),
        _ => false,
    }
}

pub(super) fn spell_is_legal(card: EntityId, state: &MatchState, active: PlayerId) -> bool {
    let player = state.player(active);
    match player.hand.get(card) {
        Some(Card::Spell(s)) => s.cost <= player.available_mana,
        _ => false,
    }
}

pub(super) fn token_is_legal(card: EntityId, state: &MatchState, active: PlayerId) -> bool {
    matches!(state.player(active).hand.get(card), Some(Card::ManaToken(_)))
}

fn not_in_hand(card: EntityId, active: PlayerId, kind: &str) -> MatchError {
    MatchError::invariant(format!("{kind} {card} is not in {active}'s hand"))
}

/// Pay for a monster and put it on the board with summoning sickness.
pub(super) fn play_monster(
    card: EntityId,
    state: &mut MatchState,
    active: PlayerId,
    bus: &mut EventBus,
) -> Result<(), MatchError> {
    if !monster_is_legal(card, state, active) {
        return Err(MatchError::invariant(format!("monster {card} is not playable")));
    }

    let player = state.player_mut(active);
    let Some(Card::Monster(monster)) = player.hand.remove(card) else {
        return Err(not_in_hand(card, active, "monster"));
    };
    let cost = monster.cost;
    if !player.pay(cost) {
        return Err(MatchError::invariant(format!("cannot pay {cost} for {card}")));
    }

    let snapshot = monster.card_snapshot();
    tracing::debug!(player = %active, card = %monster, "monster played");
    player
        .board
        .place(monster.sick())
        .map_err(|m| MatchError::invariant(format!("board full for {}", m.id)))?;

    bus.publish(GameEvent::CardPlayed {
        player: active,
        card: snapshot.clone(),
        cost,
    });
    bus.publish(GameEvent::MonsterCardPlayed {
        player: active,
        card: snapshot,
    });
    Ok(())
}

/// Pay for a spell, consume it and apply its effect.
pub(super) fn play_spell(
    card: EntityId,
    state: &mut MatchState,
    active: PlayerId,
    bus: &mut EventBus,
) -> Result<(), MatchError> {
    if !spell_is_legal(card, state, active) {
        return Err(MatchError::invariant(format!("spell {card} is not castable")));
    }

    let player = state.player_mut(active);
    let Some(Card::Spell(spell)) = player.hand.remove(card) else {
        return Err(not_in_hand(card, active, "spell"));
    };
    if !player.pay(spell.cost) {
        return Err(MatchError::invariant(format!(
            "cannot pay {} for {card}",
            spell.cost
        )));
    }

    tracing::debug!(player = %active, spell = %spell.name, effect = %spell.effect, "spell cast");
    let snapshot = Card::Spell(spell.clone()).snapshot();
    bus.publish(GameEvent::CardPlayed {
        player: active,
        card: snapshot.clone(),
        cost: spell.cost,
    });
    bus.publish(GameEvent::SpellCardPlayed {
        player: active,
        card: snapshot,
    });

    apply_effect(&spell, state, active, bus)
}

/// Consume the token and add its bonus to this turn's mana.
pub(super) fn play_mana_token(
    card: EntityId,
    state: &mut MatchState,
    active: PlayerId,
    bus: &mut EventBus,
) -> Result<(), MatchError> {
    let Some(Card::ManaToken(token)) = state.player_mut(active).hand.remove(card) else {
        return Err(not_in_hand(card, active, "mana token"));
    };

    let modifier = token.modifier;
    state.player_mut(modifier.player).gain_mana(modifier.bonus);
    tracing::debug!(player = %active, bonus = modifier.bonus, "mana token used");

    bus.publish(GameEvent::CardPlayed {
        player: active,
        card: Card::ManaToken(token).snapshot(),
        cost: 0,
    });
    Ok(())
}

fn apply_effect(
    spell: &SpellCard,
    state: &mut MatchState,
    caster: PlayerId,
    bus: &mut EventBus,
) -> Result<(), MatchError> {
    let opponent = caster.opponent();

    match &spell.effect {
        SpellEffect::Heal { amount } => {
            let healed = state.player_mut(caster).hero.heal(*amount);
            bus.publish(GameEvent::HeroGainHealth {
                player: caster,
                source: spell.name.clone(),
                amount: healed,
            });
        }

        SpellEffect::Draw { amount } => {
            let reason = DrawReason::Forced {
                source: spell.name.clone(),
            };
            state.player_mut(caster).draw_cards(*amount, reason, bus);
        }

        SpellEffect::Discard { amount } => {
            let MatchState { players, rng, .. } = state;
            let hand = &mut players[opponent].hand;
            let mut discarded = Vec::new();
            for _ in 0..*amount {
                let Some(index) = rng.choose_index(hand.len()) else {
                    break;
                };
                if let Some(card) = hand.remove_at(index) {
                    discarded.push(card.snapshot());
                }
            }
            if !discarded.is_empty() {
                bus.publish(GameEvent::CardsDiscardedFromHand {
                    player: opponent,
                    cards: discarded,
                });
            }
        }

        SpellEffect::AddToDeck { card, copies } => {
            for _ in 0..*copies {
                let id = state.ids.alloc();
                let copy = state.catalog.instantiate(card, id, caster)?;
                state.player_mut(caster).deck.append(copy);
            }
            if *copies > 0 {
                bus.publish(GameEvent::CardsAddedToDeck {
                    player: caster,
                    count: *copies,
                });
            }
        }

        SpellEffect::ReturnToHand => {
            let target = state.player(opponent).board.weakest().map(|m| m.id);
            let Some(id) = target else {
                return Ok(());
            };
            let owner = state.player_mut(opponent);
            let mut monster = owner
                .board
                .remove(id)
                .ok_or_else(|| MatchError::invariant(format!("{id} vanished from board")))?;
            monster.reset();
            let snapshot = monster.card_snapshot();

            match owner.hand.add(monster.into()) {
                Ok(()) => bus.publish(GameEvent::ReturnToHand {
                    player: opponent,
                    cards: vec![snapshot],
                }),
                Err(_) => bus.publish(GameEvent::CardsDiscardedFromHand {
                    player: opponent,
                    cards: vec![snapshot],
                }),
            }
        }
    }
    Ok(())
}
