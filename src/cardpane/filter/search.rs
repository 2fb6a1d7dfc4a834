use crate::error::{CardError, Result};
use crate::model::Card;
use regex::{Regex, RegexBuilder};

/// A compiled free-text query.
///
/// The text is treated as a case-insensitive regular expression. An empty
/// text compiles to a query that matches every card.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    text: String,
    pattern: Option<Regex>,
}

impl SearchQuery {
    pub fn compile(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let pattern = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|source| CardError::InvalidPattern {
                pattern: text.to_string(),
                source,
            })?;

        Ok(Self {
            text: text.to_string(),
            pattern: Some(pattern),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    /// True when the pattern occurs anywhere in the title or the source code.
    pub fn matches(&self, card: &Card) -> bool {
        match &self.pattern {
            None => true,
            Some(re) => re.is_match(&card.title) || re.is_match(&card.source_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, source: &str) -> Card {
        Card::new(1, title, source)
    }

    #[test]
    fn empty_query_matches_everything() {
        let q = SearchQuery::compile("").unwrap();
        assert!(q.is_empty());
        assert!(q.matches(&card("", "")));
        assert!(q.matches(&card("anything", "at all")));
    }

    #[test]
    fn matches_title_case_insensitively() {
        let q = SearchQuery::compile("hello").unwrap();
        assert!(q.matches(&card("Say HELLO", "")));
        assert!(!q.matches(&card("goodbye", "")));
    }

    #[test]
    fn matches_source_code() {
        let q = SearchQuery::compile("print").unwrap();
        assert!(q.matches(&card("untitled", "x = 1\nprint(x)")));
    }

    #[test]
    fn pattern_is_a_regex() {
        let q = SearchQuery::compile(r"^plot\d+$").unwrap();
        assert!(q.matches(&card("Plot42", "")));
        assert!(!q.matches(&card("my plot42", "")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = SearchQuery::compile("(unclosed").unwrap_err();
        match err {
            CardError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
