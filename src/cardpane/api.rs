//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any UI driving a card pane.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Session`] state
//! - **Validates boundary input**: facet names, sort-mode labels and move
//!   directions arrive as strings and are parsed here; unknown values are
//!   rejected with an error and change nothing
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//!
//! ## Testing Strategy
//!
//! API tests check parsing and dispatch. Command behavior is tested in the
//! command modules.

use crate::commands;
use crate::config::CardpaneConfig;
use crate::error::Result;
use crate::filter::Facet;
use crate::ingest::CardFeed;
use crate::model::{Card, CardId};
use crate::reorder::Direction;
use crate::session::Session;
use crate::sort::SortMode;

pub struct CardApi {
    session: Session,
}

impl CardApi {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn from_config(config: &CardpaneConfig) -> Result<Self> {
        Ok(Self::new(Session::from_config(config)?))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn show(&self, id: CardId) -> Result<CmdResult> {
        commands::show::run(&self.session, id)
    }

    pub fn search(&mut self, query: &str) -> Result<CmdResult> {
        commands::search::run(&mut self.session, query)
    }

    pub fn toggle_facet(&mut self, name: &str) -> Result<CmdResult> {
        let facet: Facet = name.parse()?;
        commands::facets::toggle(&mut self.session, facet)
    }

    pub fn facets(&self) -> Result<CmdResult> {
        commands::facets::show(&self.session)
    }

    pub fn sort(&mut self, label: &str) -> Result<CmdResult> {
        let mode: SortMode = label.parse()?;
        commands::sort::run(&mut self.session, mode)
    }

    pub fn move_card(&mut self, direction: &str, id: CardId) -> Result<CmdResult> {
        let direction: Direction = direction.parse()?;
        commands::reorder::run(&mut self.session, direction, id)
    }

    pub fn move_up(&mut self, id: CardId) -> Result<CmdResult> {
        commands::reorder::run(&mut self.session, Direction::Up, id)
    }

    pub fn move_down(&mut self, id: CardId) -> Result<CmdResult> {
        commands::reorder::run(&mut self.session, Direction::Down, id)
    }

    pub fn toggle_selection(&mut self, id: CardId) -> Result<CmdResult> {
        commands::select::toggle(&mut self.session, id)
    }

    pub fn selected(&self) -> Result<CmdResult> {
        commands::select::list(&self.session)
    }

    pub fn delete(&mut self, id: CardId) -> Result<CmdResult> {
        commands::delete::run(&mut self.session, id)
    }

    pub fn ingest(&mut self, card: Card) -> Result<CmdResult> {
        commands::ingest::run(&mut self.session, card)
    }

    /// Decodes a single JSON card and ingests it.
    pub fn ingest_json(&mut self, json: &str) -> Result<CmdResult> {
        let card: Card = serde_json::from_str(json)?;
        self.ingest(card)
    }

    pub fn drain(&mut self, feed: &CardFeed) -> Result<CmdResult> {
        commands::ingest::drain(&mut self.session, feed)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::reorder::MoveOutcome;
