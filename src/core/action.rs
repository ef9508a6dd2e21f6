//! Action representation: the six verbs a player can submit.
//!
//! An action names what the player wants to do plus the indices involved:
//! hand position, destination or source zone, attack target, facing, and
//! tribute zones. The acting player travels alongside the action rather
//! than inside it, so a request's authorization is checked in one place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::Phase;
use super::player::PlayerId;

/// Tribute zone indices. Two inline slots cover every legal summon.
pub type TributeList = SmallVec<[usize; 2]>;

/// Where an activation takes its card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationSource {
    /// Activate straight from the hand; the card moves to the first empty
    /// utility zone as it resolves.
    Hand(usize),
    /// Reveal a face-down card already in the given utility zone.
    Field(usize),
}

/// A player-submitted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Play a Pawn from hand into a Pawn zone.
    Summon {
        hand_index: usize,
        zone: usize,
        /// Face-down Defense instead of face-up Attack.
        hidden: bool,
        /// Own occupied Pawn zones sacrificed as the summon cost.
        tributes: TributeList,
    },

    /// Set an Action/Condition card from hand face-down into a utility zone.
    /// Setting a Pawn routes through the hidden summon path.
    Set { hand_index: usize, zone: usize },

    /// Reveal a card and run its effects, leaving it pending.
    Activate { source: ActivationSource },

    /// Discard the pending activated card and clear the pending slot.
    Resolve,

    /// Attack with the Pawn in `attacker`. `target` names an opposing Pawn
    /// zone; it is ignored (and may be `None`) when the opponent's Pawn
    /// row is empty and the attack is direct.
    Attack {
        attacker: usize,
        target: Option<usize>,
    },

    /// Advance past the current phase.
    EndPhase,
}

impl Action {
    /// Short verb name for diagnostics and error messages.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Summon { .. } => "Summon",
            Action::Set { .. } => "Set",
            Action::Activate { .. } => "Activate",
            Action::Resolve => "Resolve",
            Action::Attack { .. } => "Attack",
            Action::EndPhase => "EndPhase",
        }
    }
}

/// An applied action, recorded for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was submitted.
    pub turn: u32,

    /// Phase the action was submitted in.
    pub phase: Phase,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, phase: Phase) -> Self {
        Self {
            player,
            action,
            turn,
            phase,
        }
    }
}
