//! Card instances - runtime card state.
//!
//! `CardInstance` is a playable copy of a template: the template data plus
//! the state a card accumulates during a match (facing, battle position,
//! timestamps, has-attacked). Stat-modifying effects act on the copy, so
//! the catalog's templates are never touched.

use serde::{Deserialize, Serialize};

use super::template::{CardId, CardKind, CardTemplate, PawnStats};
use crate::core::player::PlayerId;

/// Battle position of a Pawn on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePosition {
    Attack,
    Defense,
}

/// A card in play: template copy plus runtime state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// The instantiated template. Pawn stats in here are the live,
    /// modifiable values for this copy.
    pub template: CardTemplate,

    /// The player whose deck this copy came from.
    pub owner: PlayerId,

    /// Is this card face-down?
    pub face_down: bool,

    /// Battle position; `Some` only for Pawns on the field.
    pub position: Option<BattlePosition>,

    /// Turn number this card was set face-down in a utility zone.
    pub turn_set_on: Option<u32>,

    /// Turn number this card was summoned to a Pawn zone.
    pub summoned_on: Option<u32>,

    /// Has this Pawn attacked this turn?
    pub has_attacked: bool,
}

impl CardInstance {
    /// Create a fresh face-up copy of a template.
    #[must_use]
    pub fn new(template: CardTemplate, owner: PlayerId) -> Self {
        Self {
            template,
            owner,
            face_down: false,
            position: None,
            turn_set_on: None,
            summoned_on: None,
            has_attacked: false,
        }
    }

    /// The template ID of this copy.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.template.id
    }

    /// Check whether this is a Pawn.
    #[must_use]
    pub fn is_pawn(&self) -> bool {
        self.template.kind.is_pawn()
    }

    /// Check whether this is a utility (Action or Condition) card.
    #[must_use]
    pub fn is_utility(&self) -> bool {
        self.template.kind.is_utility()
    }

    /// Check whether this is a Condition card.
    #[must_use]
    pub fn is_condition(&self) -> bool {
        matches!(self.template.kind, CardKind::Condition { .. })
    }

    /// Live Pawn stats of this copy, if it is a Pawn.
    #[must_use]
    pub fn pawn_stats(&self) -> Option<&PawnStats> {
        self.template.pawn_stats()
    }

    /// Mutable live Pawn stats of this copy, if it is a Pawn.
    pub fn pawn_stats_mut(&mut self) -> Option<&mut PawnStats> {
        match &mut self.template.kind {
            CardKind::Pawn(stats) => Some(stats),
            _ => None,
        }
    }

    /// Current attack value, if this is a Pawn.
    #[must_use]
    pub fn attack(&self) -> Option<i32> {
        self.pawn_stats().map(|s| s.attack)
    }

    /// Current defense value, if this is a Pawn.
    #[must_use]
    pub fn defense(&self) -> Option<i32> {
        self.pawn_stats().map(|s| s.defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::template::{ActionSpeed, Attribute, CreatureType};

    fn pawn_template() -> CardTemplate {
        CardTemplate::pawn(
            "solstice_sentinel",
            "Solstice Sentinel",
            PawnStats {
                level: 4,
                attack: 120,
                defense: 100,
                attribute: Attribute::Light,
                creature: CreatureType::Mechanical,
            },
        )
    }

    #[test]
    fn test_fresh_instance() {
        let instance = CardInstance::new(pawn_template(), PlayerId::new(0));

        assert_eq!(instance.id().as_str(), "solstice_sentinel");
        assert_eq!(instance.owner, PlayerId::new(0));
        assert!(!instance.face_down);
        assert!(instance.position.is_none());
        assert!(instance.turn_set_on.is_none());
        assert!(instance.summoned_on.is_none());
        assert!(!instance.has_attacked);
    }

    #[test]
    fn test_stat_mutation_is_per_copy() {
        let template = pawn_template();
        let mut a = CardInstance::new(template.clone(), PlayerId::new(0));
        let b = CardInstance::new(template.clone(), PlayerId::new(1));

        a.pawn_stats_mut().unwrap().attack -= 20;

        assert_eq!(a.attack(), Some(100));
        assert_eq!(b.attack(), Some(120));
        assert_eq!(template.pawn_stats().unwrap().attack, 120);
    }

    #[test]
    fn test_utility_has_no_stats() {
        let template = CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal);
        let mut instance = CardInstance::new(template, PlayerId::new(0));

        assert!(instance.is_utility());
        assert!(!instance.is_pawn());
        assert!(instance.pawn_stats().is_none());
        assert!(instance.pawn_stats_mut().is_none());
        assert_eq!(instance.attack(), None);
        assert_eq!(instance.defense(), None);
    }

    #[test]
    fn test_instance_serialization() {
        let mut instance = CardInstance::new(pawn_template(), PlayerId::new(1));
        instance.face_down = true;
        instance.position = Some(BattlePosition::Defense);
        instance.summoned_on = Some(3);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
