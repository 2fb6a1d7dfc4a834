use crate::commands::{visible_snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::SearchQuery;
use crate::session::Session;

/// Replaces the active query. An invalid pattern is returned as an error and
/// the previous query stays in place.
pub fn run(session: &mut Session, text: &str) -> Result<CmdResult> {
    let query = match SearchQuery::compile(text) {
        Ok(query) => query,
        Err(e) => {
            tracing::warn!(pattern = text, "rejected search pattern");
            return Err(e);
        }
    };
    session.query = query;
    tracing::debug!(query = text, "search query updated");

    let listed = visible_snapshot(session);
    let mut result = CmdResult::default();
    if text.is_empty() {
        result.add_message(CmdMessage::info("Search cleared"));
    } else if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No cards match /{}/", text)));
    }
    Ok(result.with_listed_cards(listed))
}
