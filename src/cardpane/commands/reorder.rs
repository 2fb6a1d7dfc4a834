use crate::commands::{visible_snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CardId;
use crate::reorder::{move_card, Direction};
use crate::session::Session;

pub fn run(session: &mut Session, direction: Direction, id: CardId) -> Result<CmdResult> {
    let found = session.store.contains(id);
    let outcome = move_card(&mut session.store, session.sort_mode, direction, id);
    session.sort_mode = outcome.mode;

    let mut result = CmdResult::default();
    if outcome.moved {
        tracing::debug!(id, %direction, mode = %outcome.mode, "card moved");
        result.add_message(CmdMessage::success(format!(
            "Card {} moved {} (sort: {})",
            id, direction, outcome.mode
        )));
    } else if found {
        let edge = match direction {
            Direction::Up => "first",
            Direction::Down => "last",
        };
        result.add_message(CmdMessage::info(format!("Card {} is already {}", id, edge)));
    } else {
        tracing::debug!(id, "move ignored, card not found");
        result.add_message(CmdMessage::warning(format!("No card with id {}", id)));
    }

    Ok(result
        .with_sort_mode(outcome.mode)
        .with_move(outcome)
        .with_listed_cards(visible_snapshot(session)))
}
