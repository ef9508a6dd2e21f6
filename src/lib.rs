//! # duelcore
//!
//! Authoritative rules engine for a two-player, turn-based collectible
//! card game. The engine is a deterministic state machine: it sequences
//! turn phases, validates and applies the six action verbs (`Summon`,
//! `Set`, `Activate`, `Resolve`, `Attack`, `EndPhase`), resolves combat,
//! and executes card effects against a mutable match state.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every handler completes validation before
//!    touching state. An action fully applies or is fully rejected with a
//!    typed, human-readable error; the state is unchanged on rejection.
//!
//! 2. **One match, one owner**: matches live in a registry keyed by
//!    `MatchId` and are fully independent. Actions are processed one at a
//!    time, synchronously, in submission order.
//!
//! 3. **Effects against capabilities**: card effects are plain data and
//!    run against the `GameContext` trait, never against match-state
//!    internals.
//!
//! ## Modules
//!
//! - `core`: players, phases, field, actions, match state, configuration
//! - `cards`: templates, instances, registry, built-in catalog
//! - `effects`: effect vocabulary, capability trait, executor
//! - `engine`: action dispatch, turn machine, combat resolution
//! - `registry`: the match registry
//!
//! ## Example
//!
//! ```
//! use duelcore::cards::builtin_registry;
//! use duelcore::core::{Action, MatchConfig, Phase, PlayerId};
//! use duelcore::registry::MatchRegistry;
//!
//! let mut matches = MatchRegistry::new(builtin_registry());
//! let id = matches.create_match(MatchConfig::default(), 42);
//!
//! // Turn 1 opens in Main 1; advancing skips Battle on the first turn.
//! let snapshot = matches.submit(id, PlayerId::new(0), &Action::EndPhase).unwrap();
//! assert_eq!(snapshot.phase, Phase::End);
//!
//! // Acting out of turn is rejected and changes nothing.
//! assert!(matches.submit(id, PlayerId::new(1), &Action::Resolve).is_err());
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod registry;

// Re-export commonly used types
pub use crate::cards::{
    builtin_registry, ActionSpeed, Attribute, BattlePosition, CardId, CardInstance, CardKind,
    CardRegistry, CardTemplate, ConditionKind, CreatureType, PawnStats,
};

pub use crate::core::{
    Action, ActionRecord, ActivationSource, Field, MatchConfig, MatchId, MatchState, Phase,
    PendingActivation, PlayerId, PlayerPair, PlayerSide, TurnFlags, ZONES_PER_ROW,
};

pub use crate::effects::{CardFilter, Effect, EffectExecutor, GameContext, StatKind};

pub use crate::engine::{dispatch, tributes_required, ActionError};

pub use crate::registry::MatchRegistry;
