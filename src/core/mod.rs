//! Core match model: players, phases, field, actions, state, configuration.
//!
//! This module holds the data aggregate the rules engine operates on. The
//! engine in `crate::engine` is the only writer; everything here is plain
//! state plus small invariant-preserving helpers.

pub mod action;
pub mod config;
pub mod field;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, ActivationSource, TributeList};
pub use config::MatchConfig;
pub use field::{Field, ZONES_PER_ROW};
pub use phase::Phase;
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::MatchRng;
pub use state::{MatchId, MatchState, PendingActivation, PlayerSide, TurnFlags};
