//! One player's side of the field.
//!
//! A side is two fixed rows of five zones each: Pawn zones for creatures
//! and utility zones for Action/Condition cards. Each zone holds at most
//! one card; slot indices are stable (destroying a card vacates its zone,
//! nothing shifts).

use serde::{Deserialize, Serialize};

use crate::cards::instance::CardInstance;

/// Zones per row. Both rows have the same width.
pub const ZONES_PER_ROW: usize = 5;

/// The two fixed-capacity zone rows of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pawns: [Option<CardInstance>; ZONES_PER_ROW],
    utility: [Option<CardInstance>; ZONES_PER_ROW],
}

impl Field {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Pawn row ===

    /// The Pawn in zone `slot`, if the slot is in range and occupied.
    #[must_use]
    pub fn pawn(&self, slot: usize) -> Option<&CardInstance> {
        self.pawns.get(slot).and_then(|zone| zone.as_ref())
    }

    /// Mutable access to the Pawn in zone `slot`.
    pub fn pawn_mut(&mut self, slot: usize) -> Option<&mut CardInstance> {
        self.pawns.get_mut(slot).and_then(|zone| zone.as_mut())
    }

    /// Put a card into Pawn zone `slot`, which must be in range and empty.
    pub fn place_pawn(&mut self, slot: usize, card: CardInstance) {
        debug_assert!(self.pawns[slot].is_none(), "pawn zone {slot} occupied");
        self.pawns[slot] = Some(card);
    }

    /// Remove and return the Pawn in zone `slot`.
    pub fn take_pawn(&mut self, slot: usize) -> Option<CardInstance> {
        self.pawns.get_mut(slot).and_then(|zone| zone.take())
    }

    /// Check whether every Pawn zone is empty (opens direct attacks).
    #[must_use]
    pub fn has_no_pawns(&self) -> bool {
        self.pawns.iter().all(|zone| zone.is_none())
    }

    /// Iterate over occupied Pawn zones as `(slot, card)`.
    pub fn pawns(&self) -> impl Iterator<Item = (usize, &CardInstance)> {
        self.pawns
            .iter()
            .enumerate()
            .filter_map(|(slot, zone)| zone.as_ref().map(|card| (slot, card)))
    }

    /// Iterate mutably over occupied Pawn zones.
    pub fn pawns_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.pawns.iter_mut().filter_map(|zone| zone.as_mut())
    }

    // === Utility row ===

    /// The card in utility zone `slot`, if the slot is in range and occupied.
    #[must_use]
    pub fn utility(&self, slot: usize) -> Option<&CardInstance> {
        self.utility.get(slot).and_then(|zone| zone.as_ref())
    }

    /// Mutable access to the card in utility zone `slot`.
    pub fn utility_mut(&mut self, slot: usize) -> Option<&mut CardInstance> {
        self.utility.get_mut(slot).and_then(|zone| zone.as_mut())
    }

    /// Put a card into utility zone `slot`, which must be in range and empty.
    pub fn place_utility(&mut self, slot: usize, card: CardInstance) {
        debug_assert!(self.utility[slot].is_none(), "utility zone {slot} occupied");
        self.utility[slot] = Some(card);
    }

    /// Remove and return the card in utility zone `slot`.
    pub fn take_utility(&mut self, slot: usize) -> Option<CardInstance> {
        self.utility.get_mut(slot).and_then(|zone| zone.take())
    }

    /// Lowest-index empty utility zone, if any.
    #[must_use]
    pub fn first_empty_utility(&self) -> Option<usize> {
        self.utility.iter().position(|zone| zone.is_none())
    }

    /// Iterate over occupied utility zones as `(slot, card)`.
    pub fn utilities(&self) -> impl Iterator<Item = (usize, &CardInstance)> {
        self.utility
            .iter()
            .enumerate()
            .filter_map(|(slot, zone)| zone.as_ref().map(|card| (slot, card)))
    }

    // === Whole field ===

    /// Iterate over every card on the field, Pawn row first.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.pawns
            .iter()
            .chain(self.utility.iter())
            .filter_map(|zone| zone.as_ref())
    }
}
