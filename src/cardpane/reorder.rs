//! Manual reordering.
//!
//! A successful move swaps a card with its neighbour and switches the sort
//! mode to [`SortMode::Custom`]. A move that cannot happen (card not found,
//! already first, already last) changes nothing, the mode included.
//!
//! The resulting mode is part of [`MoveOutcome`] so callers cannot miss it.

use crate::error::{CardError, Result};
use crate::model::CardId;
use crate::sort::SortMode;
use crate::store::CardStore;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(CardError::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub moved: bool,
    pub order: Vec<CardId>,
    pub mode: SortMode,
}

pub fn move_up(store: &mut CardStore, mode: SortMode, id: CardId) -> MoveOutcome {
    let target = store
        .position(id)
        .filter(|&index| index > 0)
        .map(|index| (index, index - 1));
    apply(store, mode, target)
}

pub fn move_down(store: &mut CardStore, mode: SortMode, id: CardId) -> MoveOutcome {
    let last = store.len().saturating_sub(1);
    let target = store
        .position(id)
        .filter(|&index| index < last)
        .map(|index| (index, index + 1));
    apply(store, mode, target)
}

pub fn move_card(
    store: &mut CardStore,
    mode: SortMode,
    direction: Direction,
    id: CardId,
) -> MoveOutcome {
    match direction {
        Direction::Up => move_up(store, mode, id),
        Direction::Down => move_down(store, mode, id),
    }
}

fn apply(store: &mut CardStore, mode: SortMode, target: Option<(usize, usize)>) -> MoveOutcome {
    let (moved, mode) = match target {
        Some((from, to)) => {
            store.swap(from, to);
            (true, SortMode::Custom)
        }
        None => (false, mode),
    };
    MoveOutcome {
        moved,
        order: store.ids(),
        mode,
    }
}
