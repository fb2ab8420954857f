//! Token location over a [`ByteDocument`].

use regex::bytes::{Regex, RegexBuilder};

use super::normalize::{encode_token, ByteDocument};
use crate::models::{Occurrence, TokenKind, TokenVocabulary};

/// Every occurrence of one vocabulary token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'v> {
    pub token: &'v str,
    pub kind: TokenKind,
    pub occurrences: Vec<Occurrence<'v>>,
}

impl<'v> Located<'v> {
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Literal byte matcher for a token
fn literal_matcher(needle: &[u8]) -> Option<Regex> {
    let pattern: String = needle.iter().map(|b| format!("\\x{:02X}", b)).collect();
    match RegexBuilder::new(&pattern).unicode(false).build() {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Cannot build matcher for a {}-byte token: {}", needle.len(), e);
            None
        }
    }
}

/// Start offsets of every occurrence of `token`, overlapping ones included
///
/// Each search resumes one character after the previous match start, so the
/// offsets are strictly increasing.
pub fn find_all(doc: &ByteDocument, token: &str) -> Vec<usize> {
    let haystack = doc.as_bytes();
    let needle = match encode_token(token) {
        Some(needle) if !needle.is_empty() && needle.len() <= haystack.len() => needle,
        _ => return Vec::new(),
    };
    let Some(matcher) = literal_matcher(&needle) else {
        return Vec::new();
    };

    let mut offsets = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        match matcher.find_at(haystack, start) {
            Some(m) => {
                offsets.push(m.start());
                start = m.start() + 1;
            }
            None => break,
        }
    }
    offsets
}

/// Locate every distinct token of `vocab`, in vocabulary order
pub fn locate<'v>(doc: &ByteDocument, vocab: &'v TokenVocabulary) -> Vec<Located<'v>> {
    let kind = vocab.kind();
    vocab
        .distinct()
        .map(|token| Located {
            token,
            kind,
            occurrences: find_all(doc, token)
                .into_iter()
                .map(|offset| Occurrence { token, kind, offset })
                .collect(),
        })
        .collect()
}
