//! Match state: the full data aggregate for one match.
//!
//! ## PlayerSide
//!
//! Everything one player owns: life points, hand, deck, discard and void
//! piles, and their side of the field.
//!
//! ## MatchState
//!
//! Both player sides plus the global bookkeeping: turn counter, phase,
//! active player, the per-turn flags, the single pending activation, and
//! an append-only action log. The state is mutated exclusively by the
//! action dispatcher; every accepted action produces a serializable
//! snapshot of this type.
//!
//! The match state also implements `GameContext`, the capability surface
//! card effects execute against.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::instance::CardInstance;
use crate::cards::template::CardId;
use crate::core::action::ActionRecord;
use crate::core::config::MatchConfig;
use crate::core::field::Field;
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, PlayerPair};
use crate::effects::{GameContext, StatKind};

/// Unique identifier for a match in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Create a new match ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}

/// Per-turn limits, reset only on the End→Draw transition.
///
/// The summon/set flags gate non-tribute Pawn plays only; tribute summons
/// are unlimited per turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    /// A non-tribute face-up summon happened this turn.
    pub normal_summon_used: bool,

    /// A non-tribute hidden set happened this turn.
    pub hidden_set_used: bool,

    /// At least one attack was declared this turn.
    pub has_battled: bool,
}

impl TurnFlags {
    /// Reset all flags for a new turn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The single in-flight activation: a card whose effects have run but which
/// has not yet been resolved to the discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingActivation {
    /// Template ID of the activated card.
    pub card: CardId,

    /// Who activated it.
    pub player: PlayerId,

    /// Utility zone the card occupies while pending.
    pub slot: usize,
}

/// Everything one player owns in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSide {
    /// Life points. Signed with no floor: negative values are meaningful.
    pub life: i32,

    /// Hand, in draw order.
    pub hand: Vec<CardInstance>,

    /// Draw pile; index 0 is the next card drawn.
    pub deck: Vec<CardInstance>,

    /// Discard pile; index 0 is the most recently discarded card.
    pub discard: Vec<CardInstance>,

    /// Cards permanently removed from play.
    pub void: Vec<CardInstance>,

    /// This player's zone rows.
    pub field: Field,
}

impl PlayerSide {
    /// Create an empty side with the given life total.
    #[must_use]
    pub fn new(life: i32) -> Self {
        Self {
            life,
            hand: Vec::new(),
            deck: Vec::new(),
            discard: Vec::new(),
            void: Vec::new(),
            field: Field::new(),
        }
    }

    /// Draw up to `count` cards from the deck head into the hand.
    ///
    /// Returns the number actually drawn; an exhausted deck short-draws
    /// silently rather than erroring.
    pub fn draw(&mut self, count: usize) -> usize {
        let drawn = count.min(self.deck.len());
        self.hand.extend(self.deck.drain(..drawn));
        drawn
    }

    /// Put a card on top of the discard pile.
    pub fn discard_card(&mut self, card: CardInstance) {
        self.discard.insert(0, card);
    }
}

/// The full state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Registry key of this match.
    pub id: MatchId,

    /// Parameters the match was created with.
    pub config: MatchConfig,

    /// Turn counter, starting at 1.
    pub turn: u32,

    /// Current phase.
    pub phase: Phase,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Both player sides.
    pub players: PlayerPair<PlayerSide>,

    /// Per-turn limits.
    pub flags: TurnFlags,

    /// The single in-flight activation, if any.
    pub pending: Option<PendingActivation>,

    /// Applied actions, oldest first.
    pub log: Vector<ActionRecord>,
}

impl MatchState {
    /// Create the opening state: turn 1, Main 1, player 0 to act, both
    /// sides at the configured life total with empty piles.
    ///
    /// Deck construction and the opening draw happen in the match
    /// registry, which owns the card catalog.
    #[must_use]
    pub fn new(id: MatchId, config: MatchConfig) -> Self {
        Self {
            id,
            config,
            turn: 1,
            phase: Phase::Main1,
            active_player: PlayerId::new(0),
            players: PlayerPair::new(|_| PlayerSide::new(config.starting_life)),
            flags: TurnFlags::default(),
            pending: None,
            log: Vector::new(),
        }
    }

    /// One player's side.
    #[must_use]
    pub fn side(&self, player: PlayerId) -> &PlayerSide {
        &self.players[player]
    }

    /// Mutable access to one player's side.
    pub fn side_mut(&mut self, player: PlayerId) -> &mut PlayerSide {
        &mut self.players[player]
    }

    /// Append an applied action to the log.
    pub fn record(&mut self, record: ActionRecord) {
        self.log.push_back(record);
    }
}

impl GameContext for MatchState {
    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn opponent_of(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }

    fn life(&self, player: PlayerId) -> i32 {
        self.players[player].life
    }

    fn modify_life(&mut self, player: PlayerId, amount: i32) {
        self.players[player].life += amount;
    }

    fn damage_player(&mut self, player: PlayerId, amount: i32) {
        self.players[player].life -= amount;
    }

    fn count_field_cards(
        &self,
        player: PlayerId,
        predicate: &dyn Fn(&CardInstance) -> bool,
    ) -> usize {
        self.players[player].field.cards().filter(|c| predicate(c)).count()
    }

    fn modify_pawn_stat(&mut self, player: PlayerId, slot: usize, stat: StatKind, amount: i32) {
        let Some(pawn) = self.players[player].field.pawn_mut(slot) else {
            return;
        };
        let Some(stats) = pawn.pawn_stats_mut() else {
            return;
        };
        match stat {
            StatKind::Attack => stats.attack += amount,
            StatKind::Defense => stats.defense += amount,
        }
    }
}
