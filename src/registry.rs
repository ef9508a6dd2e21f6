//! Match registry: one entry per live match, keyed by `MatchId`.
//!
//! The registry owns the card catalog and every in-memory match. Matches
//! are fully independent: submitting to one never touches another, so a
//! surrounding service can shard or lock per match id. There is exactly
//! one logical owner per match and no cross-match shared mutable state.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::cards::registry::CardRegistry;
use crate::cards::template::CardId;
use crate::core::action::Action;
use crate::core::config::MatchConfig;
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::rng::MatchRng;
use crate::core::state::{MatchId, MatchState};
use crate::engine::{dispatch, ActionError};

/// Registry of live matches plus the card catalog they draw from.
///
/// ## Example
///
/// ```
/// use duelcore::cards::builtin_registry;
/// use duelcore::core::{Action, MatchConfig, PlayerId};
/// use duelcore::registry::MatchRegistry;
///
/// let mut registry = MatchRegistry::new(builtin_registry());
/// let id = registry.create_match(MatchConfig::default(), 42);
///
/// let snapshot = registry.submit(id, PlayerId::new(0), &Action::EndPhase).unwrap();
/// assert_eq!(snapshot.log.len(), 1);
/// ```
pub struct MatchRegistry {
    catalog: CardRegistry,
    matches: FxHashMap<MatchId, MatchState>,
    next_id: u64,
}

impl MatchRegistry {
    /// Create a registry over a card catalog.
    #[must_use]
    pub fn new(catalog: CardRegistry) -> Self {
        Self {
            catalog,
            matches: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// The card catalog backing this registry.
    #[must_use]
    pub fn catalog(&self) -> &CardRegistry {
        &self.catalog
    }

    /// Number of live matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Check whether any matches are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Start a match with uniformly random decks drawn from the catalog.
    ///
    /// This is a stand-in deck builder for callers that do not bring their
    /// own deck lists; real deck construction is a collaborator concern.
    /// Panics if the catalog is empty.
    pub fn create_match(&mut self, config: MatchConfig, seed: u64) -> MatchId {
        assert!(!self.catalog.is_empty(), "cannot build decks from an empty catalog");

        // Stable template order keeps the same seed producing the same decks.
        let mut ids: Vec<&CardId> = self.catalog.iter().map(|t| &t.id).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let mut rng = MatchRng::new(seed);
        let decks = PlayerPair::new(|_| {
            (0..config.deck_size)
                .map(|_| {
                    let pick = rng.gen_range(0..ids.len());
                    ids[pick].clone()
                })
                .collect::<Vec<_>>()
        });

        match self.create_match_with_decks(config, decks, seed) {
            Ok(id) => id,
            // Every id was just taken from the catalog.
            Err(_) => unreachable!("random deck referenced an unknown card"),
        }
    }

    /// Start a match from explicit deck lists.
    ///
    /// Each deck is instantiated from the catalog, shuffled with the seeded
    /// RNG, and the opening hands are drawn. Rejects unknown card IDs.
    pub fn create_match_with_decks(
        &mut self,
        config: MatchConfig,
        decks: PlayerPair<Vec<CardId>>,
        seed: u64,
    ) -> Result<MatchId, ActionError> {
        let id = MatchId::new(self.next_id);
        let mut state = MatchState::new(id, config);
        let mut rng = MatchRng::new(seed);

        for player in PlayerId::both() {
            let mut deck = Vec::with_capacity(decks[player].len());
            for card_id in &decks[player] {
                let card = self
                    .catalog
                    .instantiate(card_id, player)
                    .ok_or_else(|| ActionError::UnknownCard(card_id.clone()))?;
                deck.push(card);
            }
            rng.shuffle(&mut deck);

            let side = state.side_mut(player);
            side.deck = deck;
            side.draw(config.opening_hand);
        }

        self.next_id += 1;
        self.matches.insert(id, state);
        info!(%id, seed, "match created");
        Ok(id)
    }

    /// Read a match's current state.
    pub fn state(&self, id: MatchId) -> Result<&MatchState, ActionError> {
        self.matches.get(&id).ok_or(ActionError::UnknownMatch(id))
    }

    /// Submit one action for a match.
    ///
    /// Returns the full updated state snapshot on success; on rejection
    /// the match is unchanged and the error carries a readable message.
    pub fn submit(
        &mut self,
        id: MatchId,
        player: PlayerId,
        action: &Action,
    ) -> Result<MatchState, ActionError> {
        let state = self
            .matches
            .get_mut(&id)
            .ok_or(ActionError::UnknownMatch(id))?;

        dispatch(state, player, action)?;
        Ok(state.clone())
    }

    /// Drop a finished match.
    pub fn remove(&mut self, id: MatchId) -> Option<MatchState> {
        let removed = self.matches.remove(&id);
        if removed.is_some() {
            info!(%id, "match removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::builtin_registry;
    use crate::core::phase::Phase;

    fn registry() -> MatchRegistry {
        MatchRegistry::new(builtin_registry())
    }

    #[test]
    fn test_create_match_deals_opening_state() {
        let mut registry = registry();
        let id = registry.create_match(MatchConfig::default(), 42);
        let state = registry.state(id).unwrap();

        assert_eq!(state.turn, 1);
        assert_eq!(state.phase, Phase::Main1);
        for player in PlayerId::both() {
            let side = state.side(player);
            assert_eq!(side.life, 800);
            assert_eq!(side.hand.len(), 5);
            assert_eq!(side.deck.len(), 35);
            assert!(side.discard.is_empty());
            assert!(side.void.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut registry = registry();
        let a = registry.create_match(MatchConfig::default(), 7);
        let b = registry.create_match(MatchConfig::default(), 7);

        let hands_a: Vec<_> = registry.state(a).unwrap().side(PlayerId::new(0)).hand.clone();
        let hands_b: Vec<_> = registry.state(b).unwrap().side(PlayerId::new(0)).hand.clone();

        assert_eq!(hands_a, hands_b);
    }

    #[test]
    fn test_unknown_deck_card_is_rejected() {
        let mut registry = registry();
        let decks = PlayerPair::new(|_| vec![CardId::new("not_a_card")]);

        let err = registry
            .create_match_with_decks(MatchConfig::default(), decks, 1)
            .unwrap_err();
        assert!(matches!(err, ActionError::UnknownCard(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_match_is_rejected() {
        let mut registry = registry();
        let missing = MatchId::new(99);

        assert!(matches!(
            registry.state(missing),
            Err(ActionError::UnknownMatch(_))
        ));
        assert!(matches!(
            registry.submit(missing, PlayerId::new(0), &Action::EndPhase),
            Err(ActionError::UnknownMatch(_))
        ));
    }

    #[test]
    fn test_matches_are_independent() {
        let mut registry = registry();
        let a = registry.create_match(MatchConfig::default(), 1);
        let b = registry.create_match(MatchConfig::default(), 2);

        registry.submit(a, PlayerId::new(0), &Action::EndPhase).unwrap();

        assert_eq!(registry.state(a).unwrap().phase, Phase::End);
        assert_eq!(registry.state(b).unwrap().phase, Phase::Main1);
    }

    #[test]
    fn test_submit_returns_snapshot() {
        let mut registry = registry();
        let id = registry.create_match(MatchConfig::default(), 3);

        let snapshot = registry
            .submit(id, PlayerId::new(0), &Action::EndPhase)
            .unwrap();

        assert_eq!(snapshot.phase, Phase::End);
        assert_eq!(snapshot.log.len(), 1);
        assert_eq!(&snapshot, registry.state(id).unwrap());
    }

    #[test]
    fn test_remove() {
        let mut registry = registry();
        let id = registry.create_match(MatchConfig::default(), 4);

        assert_eq!(registry.len(), 1);
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }
}
