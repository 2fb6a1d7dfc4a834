use crate::commands::{visible_snapshot, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::Facet;
use crate::session::Session;

/// Flips one facet and recomputes the visibility of every stored card.
pub fn toggle(session: &mut Session, facet: Facet) -> Result<CmdResult> {
    let enabled = session.facets.toggle(facet);
    session.store.recompute_visibility(&session.facets);
    tracing::debug!(%facet, enabled, "facet toggled");

    let state = if enabled { "on" } else { "off" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Facet {} {}", facet, state)));
    Ok(result
        .with_facets(session.facets)
        .with_listed_cards(visible_snapshot(session)))
}

pub fn show(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_facets(session.facets))
}
