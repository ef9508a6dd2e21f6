//! Effect system for card abilities.
//!
//! Effects are plain data on card templates, executed in list order:
//! - `Effect`: the effect vocabulary
//! - `GameContext`: the capability surface effects run against
//! - `EffectExecutor`: walks an effect list and applies each entry
//!
//! ## Design Philosophy
//!
//! Effects never touch match-state internals. They see only the
//! `GameContext` trait, so the effect vocabulary stays small, testable
//! against stubs, and decoupled from the state representation.

mod context;
mod effect;
mod executor;

pub use context::GameContext;
pub use effect::{CardFilter, Effect, StatKind};
pub use executor::EffectExecutor;
