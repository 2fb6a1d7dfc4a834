use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::session::Session;

pub fn run(session: &Session, id: CardId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.store.get(id) {
        Some(card) => result.affected_cards.push(card.clone()),
        None => result.add_message(CmdMessage::warning(format!("No card with id {}", id))),
    }
    Ok(result)
}
