use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Which vocabulary a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Text,
    FontName,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text => write!(f, "text"),
            TokenKind::FontName => write!(f, "font"),
        }
    }
}

/// Ordered list of known tokens of one kind
///
/// Duplicates are collapsed on insertion, keeping the first-seen position; that
/// order is what every tie-break relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVocabulary {
    kind: TokenKind,
    tokens: IndexSet<String>,
}

impl TokenVocabulary {
    pub fn new<I, S>(kind: TokenKind, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn texts<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(TokenKind::Text, tokens)
    }

    pub fn fonts<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(TokenKind::FontName, tokens)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token unless it is already present
    pub fn push_unique(&mut self, token: impl Into<String>) {
        self.tokens.insert(token.into());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Each token once, in first-seen order
    pub fn distinct(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }
}

/// One match of a token at one offset of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'v> {
    pub token: &'v str,
    pub kind: TokenKind,
    pub offset: usize,
}

impl<'v> Occurrence<'v> {
    /// Length in document characters
    pub fn len(&self) -> usize {
        self.token.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Offset one past the last character of the match
    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Absolute offset distance to another occurrence
    pub fn distance_to(&self, other: &Occurrence<'_>) -> usize {
        self.offset.abs_diff(other.offset)
    }
}

/// A text occurrence paired with a font occurrence found near it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityObservation<'v> {
    pub text: Occurrence<'v>,
    pub font: Occurrence<'v>,
    pub distance: usize,
}

impl<'v> ProximityObservation<'v> {
    pub fn new(text: Occurrence<'v>, font: Occurrence<'v>) -> Self {
        Self {
            text,
            font,
            distance: text.distance_to(&font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keeps_first_seen_order() {
        let vocab = TokenVocabulary::fonts(["B", "A", "B", "C", "A"]);
        let distinct: Vec<&str> = vocab.distinct().collect();
        assert_eq!(distinct, vec!["B", "A", "C"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn push_unique_skips_duplicates() {
        let mut vocab = TokenVocabulary::texts(["LIGHT"]);
        vocab.push_unique("LIGHT");
        vocab.push_unique("WOQM");
        assert_eq!(vocab.distinct().collect::<Vec<_>>(), vec!["LIGHT", "WOQM"]);
        assert!(vocab.contains("WOQM"));
        assert_eq!(vocab.kind(), TokenKind::Text);
    }

    #[test]
    fn observation_distance_is_symmetric() {
        let text = Occurrence { token: "T", kind: TokenKind::Text, offset: 40 };
        let font = Occurrence { token: "F", kind: TokenKind::FontName, offset: 10 };
        assert_eq!(ProximityObservation::new(text, font).distance, 30);
        assert_eq!(font.distance_to(&text), 30);
    }
}
