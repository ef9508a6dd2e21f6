//! Action dispatch: validate, then mutate.
//!
//! `dispatch` is the only entry point that mutates a match. Each handler
//! runs its validations to completion before touching state, so an action
//! either fully applies or is rejected with the state untouched. There are
//! no suspension points: a submitted action always completes or is
//! rejected synchronously.

use tracing::debug;

use crate::cards::instance::BattlePosition;
use crate::core::action::{Action, ActionRecord, ActivationSource};
use crate::core::field::ZONES_PER_ROW;
use crate::core::player::PlayerId;
use crate::core::state::{MatchState, PendingActivation};
use crate::effects::EffectExecutor;

use super::combat;
use super::error::ActionError;
use super::turn;

/// Tributes required to summon a Pawn of the given level.
///
/// Levels below 5 are free, 5-7 cost one tribute, 8 and above cost two.
#[must_use]
pub fn tributes_required(level: u8) -> usize {
    match level {
        0..=4 => 0,
        5..=7 => 1,
        _ => 2,
    }
}

/// Validate and apply one action for `player`.
///
/// On success the action is appended to the match log. On rejection the
/// state is returned unchanged - handlers never mutate before their
/// validations pass.
pub fn dispatch(
    state: &mut MatchState,
    player: PlayerId,
    action: &Action,
) -> Result<(), ActionError> {
    let turn = state.turn;
    let phase = state.phase;

    let result = if player != state.active_player {
        Err(ActionError::WrongTurn { player })
    } else {
        match action {
            Action::Summon {
                hand_index,
                zone,
                hidden,
                tributes,
            } => summon(state, player, *hand_index, *zone, *hidden, tributes),
            Action::Set { hand_index, zone } => set(state, player, *hand_index, *zone),
            Action::Activate { source } => activate(state, player, *source),
            Action::Resolve => resolve(state),
            Action::Attack { attacker, target } => {
                combat::attack(state, player, *attacker, *target)
            }
            Action::EndPhase => {
                turn::advance_phase(state);
                Ok(())
            }
        }
    };

    match &result {
        Ok(()) => {
            debug!(%player, verb = action.verb(), turn, %phase, "action applied");
            state.record(ActionRecord::new(player, action.clone(), turn, phase));
        }
        Err(err) => {
            debug!(%player, verb = action.verb(), turn, %phase, %err, "action rejected");
        }
    }

    result
}

/// Reject actions submitted outside Main 1, Battle, or Main 2.
fn require_interactive(state: &MatchState, action: &'static str) -> Result<(), ActionError> {
    if state.phase.is_interactive() {
        Ok(())
    } else {
        Err(ActionError::InvalidPhase {
            action,
            phase: state.phase,
        })
    }
}

/// Play a Pawn from hand into a Pawn zone, face-up or hidden.
fn summon(
    state: &mut MatchState,
    player: PlayerId,
    hand_index: usize,
    zone: usize,
    hidden: bool,
    tributes: &[usize],
) -> Result<(), ActionError> {
    require_interactive(state, "Summon")?;

    let side = state.side(player);
    let card = side
        .hand
        .get(hand_index)
        .ok_or_else(|| ActionError::InvalidZone(format!("hand index {hand_index} out of range")))?;
    let stats = card
        .pawn_stats()
        .ok_or_else(|| ActionError::InvalidTarget("only pawns can be summoned".into()))?;
    let level = stats.level;
    let required = tributes_required(level);

    if zone >= ZONES_PER_ROW {
        return Err(ActionError::InvalidZone(format!("pawn zone {zone} out of range")));
    }
    // The destination may be occupied by a pawn that is about to be
    // tributed away; any other occupant blocks the summon.
    if side.field.pawn(zone).is_some() && !tributes.contains(&zone) {
        return Err(ActionError::InvalidZone(format!("pawn zone {zone} is occupied")));
    }

    if required == 0 {
        if !tributes.is_empty() {
            return Err(ActionError::InsufficientTributes(format!(
                "a level {level} pawn does not take tributes"
            )));
        }
        if hidden {
            if state.flags.hidden_set_used {
                return Err(ActionError::LimitAlreadyUsed("hidden set"));
            }
        } else if state.flags.normal_summon_used {
            return Err(ActionError::LimitAlreadyUsed("normal summon"));
        }
    } else {
        if tributes.len() != required {
            return Err(ActionError::InsufficientTributes(format!(
                "a level {level} pawn requires {required} tributes, {} provided",
                tributes.len()
            )));
        }
        for (i, &slot) in tributes.iter().enumerate() {
            if tributes[..i].contains(&slot) {
                return Err(ActionError::InsufficientTributes(format!(
                    "duplicate tribute zone {slot}"
                )));
            }
            if slot >= ZONES_PER_ROW {
                return Err(ActionError::InsufficientTributes(format!(
                    "tribute zone {slot} out of range"
                )));
            }
            if side.field.pawn(slot).is_none() {
                return Err(ActionError::InsufficientTributes(format!(
                    "tribute zone {slot} is empty"
                )));
            }
        }
    }

    // Validation complete; mutate.
    let turn = state.turn;
    let side = state.side_mut(player);
    for &slot in tributes {
        if let Some(tribute) = side.field.take_pawn(slot) {
            side.discard_card(tribute);
        }
    }

    let mut card = side.hand.remove(hand_index);
    card.face_down = hidden;
    card.position = Some(if hidden {
        BattlePosition::Defense
    } else {
        BattlePosition::Attack
    });
    card.summoned_on = Some(turn);
    let effects = card.template.effects.clone();
    side.field.place_pawn(zone, card);

    if required == 0 {
        if hidden {
            state.flags.hidden_set_used = true;
        } else {
            state.flags.normal_summon_used = true;
        }
    }

    // On-summon effects fire only for face-up placement.
    if !hidden && !effects.is_empty() {
        EffectExecutor::execute_all(&effects, state);
    }

    Ok(())
}

/// Set a card from hand face-down. Pawns route through the hidden summon
/// path; Action/Condition cards go to the chosen utility zone and are
/// stamped with the current turn for the activation cooldown.
fn set(
    state: &mut MatchState,
    player: PlayerId,
    hand_index: usize,
    zone: usize,
) -> Result<(), ActionError> {
    require_interactive(state, "Set")?;

    let side = state.side(player);
    let card = side
        .hand
        .get(hand_index)
        .ok_or_else(|| ActionError::InvalidZone(format!("hand index {hand_index} out of range")))?;

    if card.is_pawn() {
        return summon(state, player, hand_index, zone, true, &[]);
    }

    if zone >= ZONES_PER_ROW {
        return Err(ActionError::InvalidZone(format!("utility zone {zone} out of range")));
    }
    if side.field.utility(zone).is_some() {
        return Err(ActionError::InvalidZone(format!("utility zone {zone} is occupied")));
    }

    let turn = state.turn;
    let side = state.side_mut(player);
    let mut card = side.hand.remove(hand_index);
    card.face_down = true;
    card.turn_set_on = Some(turn);
    side.field.place_utility(zone, card);

    Ok(())
}

/// Reveal a card and run its effect list, leaving it pending until a
/// later `Resolve` discards it.
fn activate(
    state: &mut MatchState,
    player: PlayerId,
    source: ActivationSource,
) -> Result<(), ActionError> {
    require_interactive(state, "Activate")?;

    if state.pending.is_some() {
        return Err(ActionError::ActivationInProgress);
    }

    let (slot, card_id, effects) = match source {
        ActivationSource::Hand(hand_index) => {
            let side = state.side(player);
            let card = side.hand.get(hand_index).ok_or_else(|| {
                ActionError::InvalidZone(format!("hand index {hand_index} out of range"))
            })?;
            if card.is_condition() {
                return Err(ActionError::InvalidTarget(
                    "condition cards cannot be activated from hand".into(),
                ));
            }
            if card.is_pawn() {
                return Err(ActionError::InvalidTarget("pawns cannot be activated".into()));
            }
            let slot = side.field.first_empty_utility().ok_or_else(|| {
                ActionError::InvalidZone("no empty utility zone to activate into".into())
            })?;

            let side = state.side_mut(player);
            let mut card = side.hand.remove(hand_index);
            card.face_down = false;
            let card_id = card.id().clone();
            let effects = card.template.effects.clone();
            side.field.place_utility(slot, card);
            (slot, card_id, effects)
        }

        ActivationSource::Field(slot) => {
            if slot >= ZONES_PER_ROW {
                return Err(ActionError::InvalidZone(format!(
                    "utility zone {slot} out of range"
                )));
            }
            let card = state
                .side(player)
                .field
                .utility(slot)
                .ok_or_else(|| ActionError::InvalidZone(format!("no card in utility zone {slot}")))?;
            if !card.face_down {
                return Err(ActionError::InvalidTarget("card is already face-up".into()));
            }
            if card.is_condition() {
                let set_on = card.turn_set_on.unwrap_or(state.turn);
                if state.turn - set_on < 2 {
                    return Err(ActionError::InvalidTarget(
                        "condition cards cannot activate until a full turn has passed since they were set".into(),
                    ));
                }
            }
            let card_id = card.id().clone();
            let effects = card.template.effects.clone();

            if let Some(card) = state.side_mut(player).field.utility_mut(slot) {
                card.face_down = false;
            }
            (slot, card_id, effects)
        }
    };

    state.pending = Some(PendingActivation {
        card: card_id,
        player,
        slot,
    });

    EffectExecutor::execute_all(&effects, state);

    Ok(())
}

/// Move the pending activated card to its player's discard pile and clear
/// the pending slot. With nothing pending this is a no-op.
fn resolve(state: &mut MatchState) -> Result<(), ActionError> {
    require_interactive(state, "Resolve")?;

    let Some(pending) = state.pending.take() else {
        return Ok(());
    };

    let side = state.side_mut(pending.player);
    if let Some(card) = side.field.take_utility(pending.slot) {
        side.discard_card(card);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tribute_thresholds() {
        assert_eq!(tributes_required(1), 0);
        assert_eq!(tributes_required(4), 0);
        assert_eq!(tributes_required(5), 1);
        assert_eq!(tributes_required(7), 1);
        assert_eq!(tributes_required(8), 2);
        assert_eq!(tributes_required(12), 2);
    }

    proptest! {
        #[test]
        fn test_tributes_required_bands(level in 0u8..=u8::MAX) {
            let required = tributes_required(level);
            if level < 5 {
                prop_assert_eq!(required, 0);
            } else if level <= 7 {
                prop_assert_eq!(required, 1);
            } else {
                prop_assert_eq!(required, 2);
            }
        }
    }
}
