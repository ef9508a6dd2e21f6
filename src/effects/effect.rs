//! Effect definitions.
//!
//! Effects are the atomic pieces of a card's ability, stored as plain data
//! on the template and executed in list order. They are self-contained: no
//! branching and no caller-supplied targets.

use serde::{Deserialize, Serialize};

use crate::cards::instance::CardInstance;

/// Which Pawn stat a stat-modifying effect touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
}

/// Predicate over field cards, used by counting effects.
///
/// Filters are data (not closures) so effect lists stay serializable; the
/// executor turns them into predicates for the capability surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    /// A face-down Action or Condition card in a utility zone.
    SetUtility,
    /// A face-up Pawn.
    FaceUpPawn,
}

impl CardFilter {
    /// Check whether a card matches this filter.
    #[must_use]
    pub fn matches(&self, card: &CardInstance) -> bool {
        match self {
            CardFilter::SetUtility => card.face_down && card.is_utility(),
            CardFilter::FaceUpPawn => !card.face_down && card.is_pawn(),
        }
    }
}

/// An atomic card effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// The active player gains life.
    GainLife { amount: i32 },

    /// The active player's opponent takes damage.
    DamageOpponent { amount: i32 },

    /// The active player's opponent takes `per` damage for each of their
    /// field cards matching `filter`.
    DamagePerMatching { per: i32, filter: CardFilter },

    /// Modify a targeted Pawn's stat.
    ///
    /// Defined but not yet reachable: no target-selection step exists, so
    /// executing this effect changes nothing. See the executor.
    ModifyStat { amount: i32, stat: StatKind },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::template::{ActionSpeed, Attribute, CardTemplate, CreatureType, PawnStats};
    use crate::core::player::PlayerId;

    fn pawn() -> CardInstance {
        let template = CardTemplate::pawn(
            "force_fire_sparker",
            "Force Fire Sparker",
            PawnStats {
                level: 2,
                attack: 30,
                defense: 150,
                attribute: Attribute::Fire,
                creature: CreatureType::Demon,
            },
        );
        CardInstance::new(template, PlayerId::new(0))
    }

    fn action() -> CardInstance {
        let template = CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal);
        CardInstance::new(template, PlayerId::new(0))
    }

    #[test]
    fn test_set_utility_filter() {
        let mut card = action();
        assert!(!CardFilter::SetUtility.matches(&card));

        card.face_down = true;
        assert!(CardFilter::SetUtility.matches(&card));

        let mut hidden_pawn = pawn();
        hidden_pawn.face_down = true;
        assert!(!CardFilter::SetUtility.matches(&hidden_pawn));
    }

    #[test]
    fn test_face_up_pawn_filter() {
        let card = pawn();
        assert!(CardFilter::FaceUpPawn.matches(&card));

        let mut hidden = pawn();
        hidden.face_down = true;
        assert!(!CardFilter::FaceUpPawn.matches(&hidden));

        assert!(!CardFilter::FaceUpPawn.matches(&action()));
    }

    #[test]
    fn test_effect_serialization() {
        let effects = vec![
            Effect::GainLife { amount: 100 },
            Effect::DamagePerMatching {
                per: 10,
                filter: CardFilter::SetUtility,
            },
            Effect::ModifyStat {
                amount: -20,
                stat: StatKind::Attack,
            },
        ];

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: Vec<Effect> = serde_json::from_str(&json).unwrap();
        assert_eq!(effects, deserialized);
    }
}
