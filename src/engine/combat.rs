//! Combat resolution.
//!
//! Battle-phase attacks: direct attacks against an empty Pawn row, and
//! pawn-versus-pawn clashes resolved by comparing the attacker's attack
//! stat against the target's attack or defense, depending on its battle
//! position. Destroyed Pawns go to their owner's discard pile; the zone is
//! vacated in place.

use tracing::debug;

use crate::cards::instance::BattlePosition;
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;
use crate::effects::GameContext;

use super::error::ActionError;

/// Declare an attack with the Pawn in `attacker_slot`.
///
/// When the opponent's Pawn row is empty the attack is direct and `target`
/// is ignored; otherwise `target` must name an occupied opposing Pawn zone.
/// The attacker is marked has-attacked only if it survives.
pub(crate) fn attack(
    state: &mut MatchState,
    player: PlayerId,
    attacker_slot: usize,
    target: Option<usize>,
) -> Result<(), ActionError> {
    if state.phase != Phase::Battle {
        return Err(ActionError::InvalidPhase {
            action: "Attack",
            phase: state.phase,
        });
    }

    let attacker = state
        .side(player)
        .field
        .pawn(attacker_slot)
        .ok_or_else(|| ActionError::InvalidZone(format!("no pawn in zone {attacker_slot}")))?;
    if attacker.has_attacked {
        return Err(ActionError::LimitAlreadyUsed(
            "that pawn has already attacked this turn",
        ));
    }
    let attacker_atk = attacker
        .attack()
        .ok_or_else(|| ActionError::InvalidTarget("attacker is not a pawn".into()))?;

    let opponent = player.opponent();

    if state.side(opponent).field.has_no_pawns() {
        state.damage_player(opponent, attacker_atk);
        debug!(%player, attacker_slot, damage = attacker_atk, "direct attack");
    } else {
        let target_slot = target
            .ok_or_else(|| ActionError::InvalidTarget("attack requires a target zone".into()))?;
        let defender = state
            .side(opponent)
            .field
            .pawn(target_slot)
            .ok_or_else(|| {
                ActionError::InvalidTarget(format!("no pawn in opposing zone {target_slot}"))
            })?;
        let stats = defender
            .pawn_stats()
            .ok_or_else(|| ActionError::InvalidTarget("target is not a pawn".into()))?;
        let defending = matches!(defender.position, Some(BattlePosition::Defense));
        let (target_atk, target_def) = (stats.attack, stats.defense);

        if defending {
            clash_into_defense(state, player, target_slot, attacker_atk, target_def);
        } else {
            clash_into_attack(state, player, attacker_slot, target_slot, attacker_atk, target_atk);
        }
    }

    if let Some(pawn) = state.side_mut(player).field.pawn_mut(attacker_slot) {
        pawn.has_attacked = true;
    }
    state.flags.has_battled = true;

    Ok(())
}

/// Attacker versus an Attack-position target: the lower attack stat is
/// destroyed and its controller takes the difference; ties destroy both
/// with no damage.
fn clash_into_attack(
    state: &mut MatchState,
    player: PlayerId,
    attacker_slot: usize,
    target_slot: usize,
    attacker_atk: i32,
    target_atk: i32,
) {
    let opponent = player.opponent();

    match attacker_atk.cmp(&target_atk) {
        std::cmp::Ordering::Greater => {
            destroy_pawn(state, opponent, target_slot);
            state.damage_player(opponent, attacker_atk - target_atk);
        }
        std::cmp::Ordering::Less => {
            destroy_pawn(state, player, attacker_slot);
            state.damage_player(player, target_atk - attacker_atk);
        }
        std::cmp::Ordering::Equal => {
            destroy_pawn(state, opponent, target_slot);
            destroy_pawn(state, player, attacker_slot);
        }
    }
}

/// Attacker versus a Defense-position target: breaking the defense destroys
/// the target with no damage (no piercing); bouncing off reflects the
/// difference onto the attacking player; ties do nothing.
fn clash_into_defense(
    state: &mut MatchState,
    player: PlayerId,
    target_slot: usize,
    attacker_atk: i32,
    target_def: i32,
) {
    let opponent = player.opponent();

    match attacker_atk.cmp(&target_def) {
        std::cmp::Ordering::Greater => {
            destroy_pawn(state, opponent, target_slot);
        }
        std::cmp::Ordering::Less => {
            state.damage_player(player, target_def - attacker_atk);
        }
        std::cmp::Ordering::Equal => {}
    }
}

/// Vacate a Pawn zone and move the card to its owner's discard pile.
fn destroy_pawn(state: &mut MatchState, side: PlayerId, slot: usize) {
    if let Some(card) = state.side_mut(side).field.take_pawn(slot) {
        let owner = card.owner;
        debug!(%owner, slot, card = %card.id(), "pawn destroyed");
        state.side_mut(owner).discard_card(card);
    }
}
