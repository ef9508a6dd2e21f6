//! Built-in card set.
//!
//! The shipped catalog. Card data lives here as plain constructors; the
//! registry is assembled once at service startup.

use super::registry::CardRegistry;
use super::template::{
    ActionSpeed, Attribute, CardTemplate, ConditionKind, CreatureType, PawnStats,
};
use crate::effects::{CardFilter, Effect, StatKind};

/// Build a registry containing the built-in card set.
#[must_use]
pub fn builtin_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    registry.register(solstice_sentinel());
    registry.register(high_king_of_the_west());
    registry.register(force_fire_sparker());
    registry.register(void_blast());
    registry.register(reinforcement());
    registry
}

fn solstice_sentinel() -> CardTemplate {
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
    .with_effect_text("When this card is summoned gain 100 lifepoints.")
    .with_effect(Effect::GainLife { amount: 100 })
}

fn high_king_of_the_west() -> CardTemplate {
    CardTemplate::pawn(
        "high_king_of_the_west",
        "High King of the West",
        PawnStats {
            level: 5,
            attack: 170,
            defense: 50,
            attribute: Attribute::Earth,
            creature: CreatureType::Warrior,
        },
    )
    .with_effect_text("ON SUMMON: Target 1 face-up monster on the field; it loses 20 ATK.")
    .with_effect(Effect::ModifyStat {
        amount: -20,
        stat: StatKind::Attack,
    })
}

fn force_fire_sparker() -> CardTemplate {
    CardTemplate::pawn(
        "force_fire_sparker",
        "Force Fire Sparker",
        PawnStats {
            level: 2,
            attack: 30,
            defense: 150,
            attribute: Attribute::Fire,
            creature: CreatureType::Demon,
        },
    )
    .with_effect_text(
        "ON NORMAL SUMMON: Deal 10 damage for each set Action/Condition on opponent's field.",
    )
    .with_effect(Effect::DamagePerMatching {
        per: 10,
        filter: CardFilter::SetUtility,
    })
}

fn void_blast() -> CardTemplate {
    CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal)
        .with_effect_text("Deal 50 damage to your opponent.")
        .with_effect(Effect::DamageOpponent { amount: 50 })
}

fn reinforcement() -> CardTemplate {
    CardTemplate::condition("reinforcement", "Reinforcement", ConditionKind::Normal)
        .with_effect_text("Target 1 pawn on the field, it gains +20 ATK.")
        .with_effect(Effect::ModifyStat {
            amount: 20,
            stat: StatKind::Attack,
        })
}
