//! Card registry for template lookup and instantiation.
//!
//! The `CardRegistry` stores all card templates known to a match service.
//! It provides lookup by `CardId`, enumeration for deck construction, and
//! fresh-copy instantiation.

use rustc_hash::FxHashMap;

use super::instance::CardInstance;
use super::template::{CardId, CardTemplate};
use crate::core::player::PlayerId;

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{ActionSpeed, CardId, CardRegistry, CardTemplate};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardTemplate::action("void_blast", "Void Blast", ActionSpeed::Normal));
///
/// let found = registry.get(&CardId::new("void_blast")).unwrap();
/// assert_eq!(found.name, "Void Blast");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardTemplate>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    ///
    /// Panics if a template with the same ID already exists; the catalog
    /// is assembled once at startup and duplicate IDs are a programming
    /// error, not a runtime condition.
    pub fn register(&mut self, card: CardTemplate) {
        if self.cards.contains_key(&card.id) {
            panic!("card {:?} already registered", card.id.as_str());
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardTemplate> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Create a fresh playable copy of a template for a player.
    ///
    /// Returns `None` for unknown IDs.
    #[must_use]
    pub fn instantiate(&self, id: &CardId, owner: PlayerId) -> Option<CardInstance> {
        self.cards
            .get(id)
            .map(|template| CardInstance::new(template.clone(), owner))
    }

    /// Get the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }

    /// Find templates matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardTemplate>
    where
        F: Fn(&CardTemplate) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
