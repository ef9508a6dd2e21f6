//! Effect execution.
//!
//! Runs a card's ordered effect list against a `GameContext`. Effects are
//! total: they cannot fail, so execution never needs rollback.

use tracing::trace;

use super::context::GameContext;
use super::effect::Effect;

/// Executes effect lists against a game context.
pub struct EffectExecutor;

impl EffectExecutor {
    /// Execute each effect once, in list order.
    pub fn execute_all(effects: &[Effect], ctx: &mut dyn GameContext) {
        for effect in effects {
            Self::execute(effect, ctx);
        }
    }

    /// Execute a single effect.
    pub fn execute(effect: &Effect, ctx: &mut dyn GameContext) {
        match effect {
            Effect::GainLife { amount } => {
                let active = ctx.active_player();
                ctx.modify_life(active, *amount);
            }

            Effect::DamageOpponent { amount } => {
                let opponent = ctx.opponent_of(ctx.active_player());
                ctx.damage_player(opponent, *amount);
            }

            Effect::DamagePerMatching { per, filter } => {
                let opponent = ctx.opponent_of(ctx.active_player());
                let count = ctx.count_field_cards(opponent, &|card| filter.matches(card));
                let damage = per * count as i32;
                if damage > 0 {
                    ctx.damage_player(opponent, damage);
                }
            }

            Effect::ModifyStat { amount, stat } => {
                // TODO: wire a target-selection step so this can name a
                // pawn; until the activation flow carries a chosen target,
                // there is nothing to apply the modifier to.
                trace!(?stat, amount, "stat modifier skipped: no target selection");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::instance::CardInstance;
    use crate::cards::template::{ActionSpeed, CardTemplate};
    use crate::core::player::{PlayerId, PlayerPair};
    use crate::effects::effect::{CardFilter, StatKind};

    /// Minimal context: two life totals and a bag of opponent field cards.
    struct StubContext {
        life: PlayerPair<i32>,
        field: PlayerPair<Vec<CardInstance>>,
        stat_calls: usize,
    }

    impl StubContext {
        fn new() -> Self {
            Self {
                life: PlayerPair::with_value(800),
                field: PlayerPair::with_default(),
                stat_calls: 0,
            }
        }
    }

    impl GameContext for StubContext {
        fn active_player(&self) -> PlayerId {
            PlayerId::new(0)
        }

        fn opponent_of(&self, player: PlayerId) -> PlayerId {
            player.opponent()
        }

        fn life(&self, player: PlayerId) -> i32 {
            self.life[player]
        }

        fn modify_life(&mut self, player: PlayerId, amount: i32) {
            self.life[player] += amount;
        }

        fn damage_player(&mut self, player: PlayerId, amount: i32) {
            self.life[player] -= amount;
        }

        fn count_field_cards(
            &self,
            player: PlayerId,
            predicate: &dyn Fn(&CardInstance) -> bool,
        ) -> usize {
            self.field[player].iter().filter(|c| predicate(c)).count()
        }

        fn modify_pawn_stat(
            &mut self,
            _player: PlayerId,
            _slot: usize,
            _stat: StatKind,
            _amount: i32,
        ) {
            self.stat_calls += 1;
        }
    }

    fn set_card() -> CardInstance {
        let mut card = CardInstance::new(
            CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal),
            PlayerId::new(1),
        );
        card.face_down = true;
        card
    }

    #[test]
    fn test_gain_life_targets_active_player() {
        let mut ctx = StubContext::new();

        EffectExecutor::execute(&Effect::GainLife { amount: 100 }, &mut ctx);

        assert_eq!(ctx.life(PlayerId::new(0)), 900);
        assert_eq!(ctx.life(PlayerId::new(1)), 800);
    }

    #[test]
    fn test_damage_targets_opponent() {
        let mut ctx = StubContext::new();

        EffectExecutor::execute(&Effect::DamageOpponent { amount: 50 }, &mut ctx);

        assert_eq!(ctx.life(PlayerId::new(0)), 800);
        assert_eq!(ctx.life(PlayerId::new(1)), 750);
    }

    #[test]
    fn test_damage_per_matching_counts_opponent_field() {
        let mut ctx = StubContext::new();
        ctx.field[PlayerId::new(1)].push(set_card());
        ctx.field[PlayerId::new(1)].push(set_card());

        EffectExecutor::execute(
            &Effect::DamagePerMatching {
                per: 10,
                filter: CardFilter::SetUtility,
            },
            &mut ctx,
        );

        assert_eq!(ctx.life(PlayerId::new(1)), 780);
    }

    #[test]
    fn test_damage_per_matching_zero_matches_deals_nothing() {
        let mut ctx = StubContext::new();

        EffectExecutor::execute(
            &Effect::DamagePerMatching {
                per: 10,
                filter: CardFilter::SetUtility,
            },
            &mut ctx,
        );

        assert_eq!(ctx.life(PlayerId::new(1)), 800);
    }

    #[test]
    fn test_modify_stat_is_inert_without_a_target() {
        let mut ctx = StubContext::new();

        EffectExecutor::execute(
            &Effect::ModifyStat {
                amount: -20,
                stat: StatKind::Attack,
            },
            &mut ctx,
        );

        assert_eq!(ctx.stat_calls, 0);
        assert_eq!(ctx.life(PlayerId::new(0)), 800);
        assert_eq!(ctx.life(PlayerId::new(1)), 800);
    }

    #[test]
    fn test_execute_all_runs_in_order() {
        let mut ctx = StubContext::new();

        EffectExecutor::execute_all(
            &[
                Effect::GainLife { amount: 100 },
                Effect::DamageOpponent { amount: 50 },
            ],
            &mut ctx,
        );

        assert_eq!(ctx.life(PlayerId::new(0)), 900);
        assert_eq!(ctx.life(PlayerId::new(1)), 750);
    }
}
