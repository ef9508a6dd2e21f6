//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: identity, rules
//! text, category payload, and the ordered effect list. Instance-specific
//! data (battle position, has-attacked, set turn) is stored separately in
//! `CardInstance`.
//!
//! The three card categories are a tagged variant rather than a class
//! hierarchy: a common record plus a `CardKind` payload, dispatched by
//! pattern matching.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Unique identifier for a card template.
///
/// Identifies the "kind" of card (e.g. `void_blast`), not a specific copy
/// in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Elemental attribute of a Pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Fire,
    Water,
    Earth,
    Air,
    Electric,
    Normal,
    Dark,
    Light,
}

/// Creature type of a Pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureType {
    Warrior,
    Magician,
    Dragon,
    Mechanical,
    Demon,
    Angel,
    Plant,
    Fish,
    Beast,
    Elemental,
    Primal,
    Avion,
    Undead,
    Bug,
}

/// Timing tag of an Action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSpeed {
    Normal,
    Fast,
    Lingering,
}

/// Continuity tag of a Condition card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    Normal,
    Lingering,
}

/// Combat statistics of a Pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnStats {
    /// Summoning level; levels 5-7 cost one tribute, 8+ cost two.
    pub level: u8,
    pub attack: i32,
    pub defense: i32,
    pub attribute: Attribute,
    pub creature: CreatureType,
}

/// Category payload of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// A creature permanent that occupies a Pawn zone and can attack.
    Pawn(PawnStats),
    /// An instant-effect card.
    Action { speed: ActionSpeed },
    /// A continuous card that must be set and wait before activation.
    Condition { kind: ConditionKind },
}

impl CardKind {
    /// Check whether this is the Pawn category.
    #[must_use]
    pub fn is_pawn(&self) -> bool {
        matches!(self, CardKind::Pawn(_))
    }

    /// Check whether this is a utility (Action or Condition) category.
    #[must_use]
    pub fn is_utility(&self) -> bool {
        matches!(self, CardKind::Action { .. } | CardKind::Condition { .. })
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{ActionSpeed, CardTemplate};
/// use duelcore::effects::Effect;
///
/// let blast = CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal)
///     .with_effect_text("Deal 50 damage to your opponent.")
///     .with_effect(Effect::DamageOpponent { amount: 50 });
///
/// assert_eq!(blast.id.as_str(), "void_blast");
/// assert_eq!(blast.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Rules text shown to players.
    pub effect_text: String,

    /// Category payload.
    pub kind: CardKind,

    /// Ordered effect list, executed front to back.
    pub effects: Vec<Effect>,
}

impl CardTemplate {
    fn new(id: impl Into<CardId>, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect_text: String::new(),
            kind,
            effects: Vec::new(),
        }
    }

    /// Create a Pawn template.
    #[must_use]
    pub fn pawn(id: impl Into<CardId>, name: impl Into<String>, stats: PawnStats) -> Self {
        Self::new(id, name, CardKind::Pawn(stats))
    }

    /// Create an Action template.
    #[must_use]
    pub fn action(id: impl Into<CardId>, name: impl Into<String>, speed: ActionSpeed) -> Self {
        Self::new(id, name, CardKind::Action { speed })
    }

    /// Create a Condition template.
    #[must_use]
    pub fn condition(id: impl Into<CardId>, name: impl Into<String>, kind: ConditionKind) -> Self {
        Self::new(id, name, CardKind::Condition { kind })
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_effect_text(mut self, text: impl Into<String>) -> Self {
        self.effect_text = text.into();
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Get Pawn stats, if this is a Pawn.
    #[must_use]
    pub fn pawn_stats(&self) -> Option<&PawnStats> {
        match &self.kind {
            CardKind::Pawn(stats) => Some(stats),
            _ => None,
        }
    }
}
