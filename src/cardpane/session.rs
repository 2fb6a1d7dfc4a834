//! # Session
//!
//! All mutable state of a card pane lives in one owned [`Session`] value:
//! the [`CardStore`], the [`SelectionTracker`], the active [`TypeFacets`],
//! the compiled [`SearchQuery`] and the current [`SortMode`].
//!
//! There is exactly one logical thread of control. Every command borrows the
//! session mutably, runs to completion and returns; nothing runs in the
//! background. Cards produced elsewhere reach the session only through
//! [`crate::ingest::CardFeed`], drained between commands.

use crate::config::CardpaneConfig;
use crate::error::Result;
use crate::filter::{SearchQuery, TypeFacets};
use crate::model::Card;
use crate::selection::SelectionTracker;
use crate::sort::SortMode;
use crate::store::CardStore;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub store: CardStore,
    pub selection: SelectionTracker,
    pub facets: TypeFacets,
    pub query: SearchQuery,
    pub sort_mode: SortMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from a seed collection, in the given order, all visible.
    pub fn with_cards(cards: Vec<Card>) -> Result<Self> {
        Ok(Self {
            store: CardStore::from_cards(cards)?,
            ..Self::default()
        })
    }

    pub fn from_config(config: &CardpaneConfig) -> Result<Self> {
        let seed = if config.seed_sample_card {
            vec![Card::sample()]
        } else {
            Vec::new()
        };
        let mut session = Self::with_cards(seed)?;
        session.sort_mode = config.default_sort()?;
        session.store.sort(session.sort_mode);
        Ok(session)
    }

    /// Cards that pass both the cached facet visibility and the search query,
    /// in stored order.
    pub fn visible_cards(&self) -> Vec<&Card> {
        self.store
            .cards()
            .iter()
            .filter(|card| self.store.is_visible(card.id) && self.query.matches(card))
            .collect()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::CardOutput;

    /// Builds sessions card by card for tests.
    #[derive(Default)]
    pub struct SessionFixture {
        cards: Vec<Card>,
    }

    impl SessionFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_card(mut self, id: u64, title: &str) -> Self {
            self.cards.push(Card::new(id, title, format!("# source of {title}")));
            self
        }

        pub fn with_output_card(mut self, id: u64, title: &str, kind: &str) -> Self {
            self.cards.push(
                Card::new(id, title, format!("# source of {title}"))
                    .with_output(CardOutput::new(kind, "")),
            );
            self
        }

        pub fn build(self) -> Session {
            Session::with_cards(self.cards).expect("fixture ids must be unique")
        }
    }
}
