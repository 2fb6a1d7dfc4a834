use crate::commands::{visible_snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::sort::SortMode;

/// Makes `mode` the active sort mode and re-sorts the whole collection.
pub fn run(session: &mut Session, mode: SortMode) -> Result<CmdResult> {
    session.sort_mode = mode;
    session.store.sort(mode);
    tracing::debug!(%mode, cards = session.store.len(), "sorted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Sorted by {}", mode)));
    Ok(result
        .with_sort_mode(mode)
        .with_listed_cards(visible_snapshot(session)))
}
