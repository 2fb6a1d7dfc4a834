use crate::model::CardId;
use std::collections::BTreeSet;

/// The set of currently selected card ids.
///
/// Ids are not checked against the store: a selection may outlive the card it
/// points to.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: BTreeSet<CardId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` when absent, removes it when present. Returns the new state.
    pub fn toggle(&mut self, id: CardId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: CardId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<CardId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
