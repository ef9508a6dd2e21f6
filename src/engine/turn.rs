//! Phase advancement and the turn hand-off.
//!
//! `EndPhase` is the one action that is legal in every phase; it moves the
//! match one step along Draw → Standby → Main1 → Battle → Main2 → End.
//! Leaving End performs the turn hand-off: seat swap, flag reset, and the
//! incoming player's refill draw.

use tracing::debug;

use crate::core::phase::Phase;
use crate::core::state::MatchState;

/// Advance the match one phase. Never fails.
pub fn advance_phase(state: &mut MatchState) {
    let from = state.phase;

    if state.phase == Phase::End {
        end_turn(state);
    } else {
        state.phase = state.phase.next(state.turn);
    }

    debug!(%from, to = %state.phase, turn = state.turn, "phase advanced");
}

/// The End→Draw transition: hand the turn to the other player.
///
/// In order: swap the active player, bump the turn counter, clear the
/// per-turn flags and any pending activation, clear has-attacked on every
/// Pawn on both sides, then refill the incoming player's hand — up to the
/// refill threshold when below it, exactly one card otherwise, and never
/// more than the deck holds.
fn end_turn(state: &mut MatchState) {
    let incoming = state.active_player.opponent();
    state.active_player = incoming;
    state.turn += 1;
    state.flags.clear();
    state.pending = None;

    for (_, side) in state.players.iter_mut() {
        for pawn in side.field.pawns_mut() {
            pawn.has_attacked = false;
        }
    }

    let refill_to = state.config.refill_to;
    let side = state.side_mut(incoming);
    if !side.deck.is_empty() {
        let want = if side.hand.len() < refill_to {
            refill_to - side.hand.len()
        } else {
            1
        };
        let drawn = side.draw(want);
        debug!(player = %incoming, drawn, hand = side.hand.len(), "refill draw");
    }

    state.phase = Phase::Draw;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::instance::CardInstance;
    use crate::cards::template::{Attribute, CardTemplate, CreatureType, PawnStats};
    use crate::core::config::MatchConfig;
    use crate::core::player::PlayerId;
    use crate::core::state::{MatchId, MatchState, PendingActivation};

    fn fresh_state() -> MatchState {
        MatchState::new(MatchId::new(0), MatchConfig::default())
    }

    fn pawn(owner: PlayerId) -> CardInstance {
        CardInstance::new(
            CardTemplate::pawn(
                "solstice_sentinel",
                "Solstice Sentinel",
                PawnStats {
                    level: 4,
                    attack: 120,
                    defense: 100,
                    attribute: Attribute::Light,
                    creature: CreatureType::Mechanical,
                },
            ),
            owner,
        )
    }

    fn fill_deck(state: &mut MatchState, player: PlayerId, count: usize) {
        for _ in 0..count {
            let card = pawn(player);
            state.side_mut(player).deck.push(card);
        }
    }

    #[test]
    fn test_turn_one_path_skips_battle() {
        let mut state = fresh_state();
        assert_eq!(state.phase, Phase::Main1);

        advance_phase(&mut state);
        assert_eq!(state.phase, Phase::End);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn test_turn_two_runs_full_cycle() {
        let mut state = fresh_state();
        advance_phase(&mut state); // Main1 -> End
        advance_phase(&mut state); // End -> Draw, turn 2

        assert_eq!(state.turn, 2);
        assert_eq!(state.active_player, PlayerId::new(1));

        let phases = [Phase::Standby, Phase::Main1, Phase::Battle, Phase::Main2, Phase::End];
        for expected in phases {
            advance_phase(&mut state);
            assert_eq!(state.phase, expected);
        }
    }

    #[test]
    fn test_end_turn_resets_flags_and_pending() {
        let mut state = fresh_state();
        state.phase = Phase::End;
        state.flags.normal_summon_used = true;
        state.flags.hidden_set_used = true;
        state.flags.has_battled = true;
        state.pending = Some(PendingActivation {
            card: crate::cards::template::CardId::new("void_blast"),
            player: PlayerId::new(0),
            slot: 0,
        });

        advance_phase(&mut state);

        assert!(!state.flags.normal_summon_used);
        assert!(!state.flags.hidden_set_used);
        assert!(!state.flags.has_battled);
        assert!(state.pending.is_none());
        assert_eq!(state.phase, Phase::Draw);
    }

    #[test]
    fn test_end_turn_clears_attack_flags_on_both_sides() {
        let mut state = fresh_state();
        state.phase = Phase::End;

        let mut p0_pawn = pawn(PlayerId::new(0));
        p0_pawn.has_attacked = true;
        state.side_mut(PlayerId::new(0)).field.place_pawn(0, p0_pawn);

        let mut p1_pawn = pawn(PlayerId::new(1));
        p1_pawn.has_attacked = true;
        state.side_mut(PlayerId::new(1)).field.place_pawn(3, p1_pawn);

        advance_phase(&mut state);

        assert!(!state.side(PlayerId::new(0)).field.pawn(0).unwrap().has_attacked);
        assert!(!state.side(PlayerId::new(1)).field.pawn(3).unwrap().has_attacked);
    }

    #[test]
    fn test_refill_tops_up_small_hand() {
        let mut state = fresh_state();
        state.phase = Phase::End;
        let incoming = PlayerId::new(1);
        fill_deck(&mut state, incoming, 10);
        state.side_mut(incoming).draw(3);
        assert_eq!(state.side(incoming).hand.len(), 3);

        advance_phase(&mut state);

        assert_eq!(state.side(incoming).hand.len(), 5);
    }

    #[test]
    fn test_refill_draws_one_at_threshold_or_above() {
        let mut state = fresh_state();
        state.phase = Phase::End;
        let incoming = PlayerId::new(1);
        fill_deck(&mut state, incoming, 10);
        state.side_mut(incoming).draw(6);

        advance_phase(&mut state);

        assert_eq!(state.side(incoming).hand.len(), 7);
    }

    #[test]
    fn test_refill_short_draws_on_thin_deck() {
        let mut state = fresh_state();
        state.phase = Phase::End;
        let incoming = PlayerId::new(1);
        fill_deck(&mut state, incoming, 1);

        advance_phase(&mut state);

        // Wanted 5, deck held 1: drew 1, no error.
        assert_eq!(state.side(incoming).hand.len(), 1);
        assert!(state.side(incoming).deck.is_empty());
    }

    #[test]
    fn test_refill_on_empty_deck_is_a_no_op() {
        let mut state = fresh_state();
        state.phase = Phase::End;

        advance_phase(&mut state);

        assert!(state.side(PlayerId::new(1)).hand.is_empty());
    }
}
