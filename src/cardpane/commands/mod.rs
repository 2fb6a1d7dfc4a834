//! # Commands
//!
//! One module per user-facing operation. Each command is a plain function
//! over `&mut Session` (or `&Session` for read-only ones) that returns
//! [`CmdResult`]. Commands never print; user-facing text goes into
//! [`CmdMessage`]s and the caller decides how to show it.
//!
//! Not-found conditions (moving, deleting or showing an absent card) are not
//! errors. They come back as a warning message with the session unchanged.

use crate::filter::TypeFacets;
use crate::model::{Card, CardId};
use crate::reorder::MoveOutcome;
use crate::sort::SortMode;

pub mod delete;
pub mod facets;
pub mod ingest;
pub mod list;
pub mod reorder;
pub mod search;
pub mod select;
pub mod show;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<Card>,
    pub selected: Vec<CardId>,
    pub facets: Option<TypeFacets>,
    pub sort_mode: Option<SortMode>,
    pub moved: Option<MoveOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_selected(mut self, ids: Vec<CardId>) -> Self {
        self.selected = ids;
        self
    }

    pub fn with_facets(mut self, facets: TypeFacets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = Some(mode);
        self
    }

    pub fn with_move(mut self, outcome: MoveOutcome) -> Self {
        self.moved = Some(outcome);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Snapshot of the cards currently on display.
pub(crate) fn visible_snapshot(session: &crate::session::Session) -> Vec<Card> {
    session.visible_cards().into_iter().cloned().collect()
}
