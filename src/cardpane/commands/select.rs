use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::session::Session;

/// Toggles `id` in the selection. The id is not checked against the store.
pub fn toggle(session: &mut Session, id: CardId) -> Result<CmdResult> {
    let selected = session.selection.toggle(id);
    tracing::debug!(id, selected, "selection toggled");

    let mut result = CmdResult::default();
    let verb = if selected { "selected" } else { "deselected" };
    result.add_message(CmdMessage::success(format!("Card {} {}", id, verb)));
    if selected && !session.store.contains(id) {
        result.add_message(CmdMessage::info(format!(
            "Card {} is not in the pane",
            id
        )));
    }
    Ok(result.with_selected(session.selection.ids()))
}

pub fn list(session: &Session) -> Result<CmdResult> {
    let cards = session
        .selection
        .ids()
        .into_iter()
        .filter_map(|id| session.store.get(id).cloned())
        .collect();
    Ok(CmdResult::default()
        .with_selected(session.selection.ids())
        .with_listed_cards(cards))
}
