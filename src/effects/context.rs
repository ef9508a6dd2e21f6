//! Game capability surface for effect execution.
//!
//! Effects never reach into match-state internals. They run against the
//! `GameContext` trait, which exposes exactly the operations the effect
//! vocabulary needs. The match state implements this trait; tests can
//! implement it with a stub.

use crate::cards::instance::CardInstance;
use crate::core::player::PlayerId;
use crate::effects::effect::StatKind;

/// Capabilities an executing effect may use.
pub trait GameContext {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// The opponent of a player.
    fn opponent_of(&self, player: PlayerId) -> PlayerId;

    /// A player's current life points.
    fn life(&self, player: PlayerId) -> i32;

    /// Adjust a player's life points by a signed amount.
    fn modify_life(&mut self, player: PlayerId, amount: i32);

    /// Deal damage to a player. Life has no floor; it may go negative.
    fn damage_player(&mut self, player: PlayerId, amount: i32);

    /// Count a player's field cards (both zone rows) matching a predicate.
    fn count_field_cards(
        &self,
        player: PlayerId,
        predicate: &dyn Fn(&CardInstance) -> bool,
    ) -> usize;

    /// Adjust a stat of the Pawn in a player's zone `slot`. Empty zones
    /// and out-of-range slots are ignored.
    fn modify_pawn_stat(&mut self, player: PlayerId, slot: usize, stat: StatKind, amount: i32);
}
