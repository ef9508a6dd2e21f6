//! The rules engine: action dispatch, the turn machine, and combat.
//!
//! `dispatch` is the single mutation entry point for a match. It checks
//! the acting player, routes the six verbs to their handlers, and records
//! accepted actions in the match log. Handlers validate fully before
//! mutating, so rejections leave the state untouched.

mod combat;
pub mod dispatcher;
pub mod error;
mod turn;

pub use dispatcher::{dispatch, tributes_required};
pub use error::ActionError;
