//! Bounded slices of a document around an offset.

use super::normalize::ByteDocument;
use crate::utils::naming::clean_snippet;

/// Longest snippet kept in reports
pub const MAX_SNIPPET_CHARS: usize = 100;

/// Clamped window `[start, end)` over a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// `left` characters before `center` and `right` after it, clamped to the document
    pub fn new(doc: &ByteDocument, center: usize, left: usize, right: usize) -> Self {
        let len = doc.len();
        let center = center.min(len);
        Self {
            start: center.saturating_sub(left),
            end: center.saturating_add(right).min(len),
        }
    }

    /// The token at `offset` plus `radius` characters on each side
    pub fn around(doc: &ByteDocument, offset: usize, token_len: usize, radius: usize) -> Self {
        Self::new(doc, offset, radius, token_len.saturating_add(radius))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `[offset, offset + len)` lies completely inside the window
    pub fn contains_span(&self, offset: usize, len: usize) -> bool {
        offset >= self.start && offset.saturating_add(len) <= self.end
    }

    pub fn text(&self, doc: &ByteDocument) -> String {
        doc.slice_text(self.start, self.end)
    }
}

/// Window text plus the offsets actually used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub window: Window,
    pub text: String,
}

/// Extract the raw context around `center`
pub fn extract(doc: &ByteDocument, center: usize, left: usize, right: usize) -> Context {
    let window = Window::new(doc, center, left, right);
    Context {
        window,
        text: window.text(doc),
    }
}

/// Human-readable excerpt around a match, for audit output
pub fn snippet(doc: &ByteDocument, offset: usize, token_len: usize, radius: usize) -> String {
    let context = extract(doc, offset, radius, token_len.saturating_add(radius));
    let mut cleaned = clean_snippet(&context.text);
    if cleaned.chars().count() > MAX_SNIPPET_CHARS {
        cleaned = cleaned.chars().take(MAX_SNIPPET_CHARS).collect();
        cleaned.push_str("...");
    }
    cleaned
}
