use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::session::Session;

/// Removes the card from the sequence. Selection and visibility entries for
/// it are left alone.
pub fn run(session: &mut Session, id: CardId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match session.store.remove(id) {
        Some(card) => {
            tracing::debug!(id, remaining = session.store.len(), "card deleted");
            result.add_message(CmdMessage::success(format!(
                "Card deleted ({}): {}",
                id, card.title
            )));
            result.affected_cards.push(card);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No card with id {}", id)));
        }
    }

    Ok(result)
}
