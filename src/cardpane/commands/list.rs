use crate::commands::{visible_snapshot, CmdResult};
use crate::error::Result;
use crate::session::Session;

pub fn run(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_cards(visible_snapshot(session))
        .with_sort_mode(session.sort_mode))
}
