use crate::model::CardId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown facet '{0}' (expected text, rich or error)")]
    UnknownFacet(String),

    #[error("Unknown sort mode '{0}'")]
    UnknownSortMode(String),

    #[error("Unknown move direction '{0}' (expected up or down)")]
    UnknownDirection(String),

    #[error("A card with id {0} is already present")]
    DuplicateCard(CardId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CardError>;
