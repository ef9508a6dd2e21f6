//! Rejection errors for submitted actions.
//!
//! Every variant is a request-level rejection, never match-fatal: the
//! dispatcher validates fully before mutating, so a returned error means
//! the match state is exactly as it was before the submission. Retrying is
//! the caller's business; the engine has no retry logic.

use thiserror::Error;

use crate::cards::template::CardId;
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::MatchId;

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The acting player is not the active player.
    #[error("it is not {player}'s turn")]
    WrongTurn { player: PlayerId },

    /// The action is not legal in the current phase.
    #[error("{action} is not allowed during the {phase} phase")]
    InvalidPhase { action: &'static str, phase: Phase },

    /// A zone or hand index is out of range, or occupied/empty where the
    /// opposite was required.
    #[error("invalid zone: {0}")]
    InvalidZone(String),

    /// Wrong tribute count, or a tribute index naming an illegal zone.
    #[error("tribute requirement not met: {0}")]
    InsufficientTributes(String),

    /// A once-per-turn allowance was already consumed.
    #[error("once-per-turn limit reached: {0}")]
    LimitAlreadyUsed(&'static str),

    /// An activation is pending; no second Activate is accepted until the
    /// first is resolved.
    #[error("another activation is already in progress")]
    ActivationInProgress,

    /// A missing or illegal attack/effect target.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// The registry has no match under this ID.
    #[error("unknown match {0}")]
    UnknownMatch(MatchId),

    /// The catalog has no template under this ID.
    #[error("unknown card `{0}`")]
    UnknownCard(CardId),
}
