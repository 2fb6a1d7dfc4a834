use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ingest::CardFeed;
use crate::model::Card;
use crate::session::Session;

/// Appends a produced card, then re-sorts the whole collection by the active
/// mode. Under `Custom` the new card stays at the end.
///
/// The new card's visibility entry is computed from the current facets.
pub fn run(session: &mut Session, card: Card) -> Result<CmdResult> {
    let visible = session.facets.matches(&card);
    let id = card.id;
    let title = card.title.clone();

    session.store.push(card.clone(), visible).inspect_err(|e| {
        tracing::warn!(id, error = %e, "card rejected");
    })?;
    session.store.sort(session.sort_mode);
    tracing::debug!(id, mode = %session.sort_mode, cards = session.store.len(), "card ingested");

    let mut result = CmdResult::default().with_sort_mode(session.sort_mode);
    result.add_message(CmdMessage::success(format!(
        "Card added ({}): {}",
        id, title
    )));
    Ok(result.with_affected_cards(vec![card]))
}

/// Ingests everything the feed has delivered so far, in delivery order.
///
/// A rejected card is reported and skipped; it does not stop the drain.
pub fn drain(session: &mut Session, feed: &CardFeed) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for card in feed.pending() {
        let id = card.id;
        match run(session, card) {
            Ok(mut single) => {
                result.affected_cards.append(&mut single.affected_cards);
                result.messages.append(&mut single.messages);
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!("Card {} skipped: {}", id, e)));
            }
        }
    }
    Ok(result.with_sort_mode(session.sort_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::CardError;
    use crate::filter::Facet;
    use crate::ingest::channel;
    use crate::model::CardOutput;
    use crate::session::fixtures::SessionFixture;
    use crate::sort::SortMode;

    fn session() -> Session {
        SessionFixture::new()
            .with_card(1, "b")
            .with_card(2, "a")
            .build()
    }

    #[test]
    fn appends_under_oldest() {
        let mut session = session();
        run(&mut session, Card::new(3, "c", "")).unwrap();
        assert_eq!(session.store.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn newest_puts_highest_id_first() {
        let mut session = session();
        session.sort_mode = SortMode::Newest;
        run(&mut session, Card::new(9, "z", "")).unwrap();
        assert_eq!(session.store.ids()[0], 9);
    }

    #[test]
    fn resorts_whole_collection() {
        let mut session = session();
        // Stored order is [1, 2] even though the mode claims alphabetical.
        session.sort_mode = SortMode::AlphaAsc;
        run(&mut session, Card::new(3, "0", "")).unwrap();
        assert_eq!(session.store.ids(), vec![3, 2, 1]);
    }

    #[test]
    fn custom_keeps_new_card_last() {
        let mut session = session();
        session.sort_mode = SortMode::Custom;
        run(&mut session, Card::new(0, "first?", "")).unwrap();
        assert_eq!(session.store.ids(), vec![1, 2, 0]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut session = session();
        let err = run(&mut session, Card::new(1, "again", "")).unwrap_err();
        assert!(matches!(err, CardError::DuplicateCard(1)));
        assert_eq!(session.store.len(), 2);
    }

    #[test]
    fn new_card_visibility_follows_facets() {
        let mut session = session();
        crate::commands::facets::toggle(&mut session, Facet::Rich).unwrap();
        crate::commands::facets::toggle(&mut session, Facet::Error).unwrap();
        run(
            &mut session,
            Card::new(4, "img", "").with_output(CardOutput::new("image/png", "")),
        )
        .unwrap();
        assert!(!session.store.is_visible(4));
        assert_eq!(session.store.visibility().len(), 3);
    }

    #[test]
    fn drain_processes_in_delivery_order_and_skips_duplicates() {
        let mut session = session();
        session.sort_mode = SortMode::Custom;
        let (producer, feed) = channel();
        producer.send(Card::new(5, "five", ""));
        producer.send(Card::new(1, "dup", ""));
        producer.send(Card::new(4, "four", ""));

        let result = drain(&mut session, &feed).unwrap();
        assert_eq!(session.store.ids(), vec![1, 2, 5, 4]);
        assert_eq!(result.affected_cards.len(), 2);
        let skipped: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].content.starts_with("Card 1 skipped"));
    }
}
