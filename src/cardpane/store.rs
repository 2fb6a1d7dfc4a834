//! # Card Store
//!
//! [`CardStore`] owns the ordered card sequence and the id→visibility mapping.
//!
//! The sequence order is the single source of truth for display order. The
//! visibility mapping only hides or shows; it never reorders.
//!
//! Visibility entries are not cleaned up when a card is removed. An orphaned
//! entry is harmless: lookups always go through the live sequence.

use crate::error::{CardError, Result};
use crate::filter::TypeFacets;
use crate::model::{Card, CardId};
use crate::sort::{sort_cards, SortMode};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    visibility: HashMap<CardId, bool>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a seed collection. Every card starts visible.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut store = Self::new();
        for card in cards {
            store.push(card, true)?;
        }
        Ok(store)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Appends a card at the end of the sequence with the given visibility.
    pub fn push(&mut self, card: Card, visible: bool) -> Result<()> {
        if self.contains(card.id) {
            return Err(CardError::DuplicateCard(card.id));
        }
        self.visibility.insert(card.id, visible);
        self.cards.push(card);
        Ok(())
    }

    /// Removes the first card with `id`. The visibility entry is left behind.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    pub fn sort(&mut self, mode: SortMode) {
        sort_cards(&mut self.cards, mode);
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.cards.swap(a, b);
    }

    /// Recomputes the visibility entry of every stored card from the facets.
    pub fn recompute_visibility(&mut self, facets: &TypeFacets) {
        for card in &self.cards {
            self.visibility.insert(card.id, facets.matches(card));
        }
    }

    /// Cached facet visibility. A card without an entry counts as visible.
    pub fn is_visible(&self, id: CardId) -> bool {
        self.visibility.get(&id).copied().unwrap_or(true)
    }

    pub fn visibility(&self) -> &HashMap<CardId, bool> {
        &self.visibility
    }
}
