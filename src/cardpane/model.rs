use serde::{Deserialize, Serialize};

/// Card identity. Assigned by the producer, never by this crate.
pub type CardId = u64;

/// A single typed result produced by running a card's source.
///
/// `kind` is a MIME-like category ("text/plain", "image/png", "error", "stdout", ...).
/// `content` is opaque to the core and is carried around untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardOutput {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

impl CardOutput {
    pub fn new(kind: impl Into<String>, content: impl Into<serde_json::Value>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub source_code: String,
    // Insertion order is significant: the type filter walks outputs front to back.
    #[serde(default)]
    pub outputs: Vec<CardOutput>,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, source_code: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            source_code: source_code.into(),
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, output: CardOutput) -> Self {
        self.outputs.push(output);
        self
    }

    /// The card every fresh session starts with unless seeding is turned off.
    pub fn sample() -> Self {
        Card::new(0, "sample card", "print(\"Hello, world!\");")
            .with_output(CardOutput::new("text/plain", "Hello, world!"))
    }
}
