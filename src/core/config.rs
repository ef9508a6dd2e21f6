//! Match configuration.
//!
//! The engine hardcodes the rules, not the numbers. Starting life, deck
//! size, and hand sizes are configured at match creation; the defaults
//! match the standard format.

use serde::{Deserialize, Serialize};

/// Tunable parameters for a match.
///
/// ## Example
///
/// ```
/// use duelcore::core::MatchConfig;
///
/// let config = MatchConfig::default().with_starting_life(400);
/// assert_eq!(config.starting_life, 400);
/// assert_eq!(config.deck_size, 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Life points each player starts with.
    pub starting_life: i32,

    /// Number of cards in each deck.
    pub deck_size: usize,

    /// Cards drawn at match start.
    pub opening_hand: usize,

    /// End-phase refill threshold: the incoming player draws up to this
    /// hand size, or exactly 1 card when already at or above it.
    pub refill_to: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_life: 800,
            deck_size: 40,
            opening_hand: 5,
            refill_to: 5,
        }
    }
}

impl MatchConfig {
    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand = size;
        self
    }

    /// Set the end-phase refill threshold.
    #[must_use]
    pub fn with_refill_to(mut self, size: usize) -> Self {
        self.refill_to = size;
        self
    }
}
