//! # Ingestion Port
//!
//! New cards are produced outside the core (an execution kernel, a file, a
//! test) and delivered one at a time over a FIFO channel.
//!
//! - [`CardProducer`]: the sending side. Cheap to clone, `Send`, usable from
//!   any thread.
//! - [`CardFeed`]: the receiving side, owned by whoever drives the session.
//!   It never blocks: [`CardFeed::pending`] yields what has already arrived.
//!
//! Applying a delivered card to a session (append, then re-sort) is the job
//! of [`crate::commands::ingest`].

use crate::model::Card;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io::BufRead;
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone)]
pub struct CardProducer {
    tx: Sender<Card>,
}

impl CardProducer {
    /// Delivers a card. Returns false once the feed has been dropped.
    pub fn send(&self, card: Card) -> bool {
        self.tx.send(card).is_ok()
    }
}

#[derive(Debug)]
pub struct CardFeed {
    rx: Receiver<Card>,
}

impl CardFeed {
    /// Cards delivered so far, oldest first. Does not wait for more.
    pub fn pending(&self) -> impl Iterator<Item = Card> + '_ {
        self.rx.try_iter()
    }
}

pub fn channel() -> (CardProducer, CardFeed) {
    let (tx, rx) = unbounded();
    (CardProducer { tx }, CardFeed { rx })
}

/// Starts a producer thread that decodes one JSON card per line.
///
/// Blank lines are skipped. Lines that fail to decode are logged and skipped;
/// they never stop the stream.
pub fn spawn_json_lines<R>(reader: R) -> (CardFeed, JoinHandle<usize>)
where
    R: BufRead + Send + 'static,
{
    let (producer, feed) = channel();
    let handle = thread::spawn(move || {
        let mut delivered = 0;
        // Raw bytes per line: a badly encoded line is skipped like any other
        // malformed one. Only a failing reader ends the stream.
        for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "card feed read failed");
                    break;
                }
            };
            if line.trim_ascii().is_empty() {
                continue;
            }
            match serde_json::from_slice::<Card>(&line) {
                Ok(card) => {
                    if !producer.send(card) {
                        break;
                    }
                    delivered += 1;
                }
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "skipping malformed card");
                }
            }
        }
        tracing::debug!(delivered, "card feed finished");
        delivered
    });
    (feed, handle)
}
