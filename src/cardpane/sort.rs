use crate::error::{CardError, Result};
use crate::model::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active ordering rule.
///
/// `Custom` means "trust the stored order". It is entered by manual moves
/// and sorting under it never touches the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "Oldest")]
    Oldest,
    #[serde(rename = "Newest")]
    Newest,
    #[serde(rename = "Alphabetical: A-Z")]
    AlphaAsc,
    #[serde(rename = "Alphabetical: Z-A")]
    AlphaDesc,
    #[serde(rename = "Custom")]
    Custom,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Oldest,
            SortMode::Newest,
            SortMode::AlphaAsc,
            SortMode::AlphaDesc,
            SortMode::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Oldest => "Oldest",
            SortMode::Newest => "Newest",
            SortMode::AlphaAsc => "Alphabetical: A-Z",
            SortMode::AlphaDesc => "Alphabetical: Z-A",
            SortMode::Custom => "Custom",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortMode {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        SortMode::all()
            .iter()
            .copied()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| CardError::UnknownSortMode(s.to_string()))
    }
}

/// Reorders `cards` in place. Ties keep their relative order.
pub fn sort_cards(cards: &mut [Card], mode: SortMode) {
    match mode {
        SortMode::Oldest => cards.sort_by(|a, b| a.id.cmp(&b.id)),
        SortMode::Newest => cards.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::AlphaAsc => cards.sort_by(|a, b| a.title.cmp(&b.title)),
        SortMode::AlphaDesc => cards.sort_by(|a, b| b.title.cmp(&a.title)),
        SortMode::Custom => {}
    }
}
