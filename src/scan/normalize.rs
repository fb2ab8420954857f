//! Byte normalization: zero bytes out, one Latin-1 character per remaining byte.

use std::borrow::Cow;

/// Rendered in place of bytes with no graphic Latin-1 mapping
pub const PLACEHOLDER: char = '\u{FFFD}';

/// Searchable character sequence derived from raw file bytes
///
/// Each unit is one byte of the source with every zero byte removed, so an
/// offset into the document is a character index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteDocument {
    units: Vec<u8>,
}

impl ByteDocument {
    /// Strip filler bytes. Never fails, whatever the input.
    pub fn normalize(raw: &[u8]) -> Self {
        Self {
            units: raw.iter().copied().filter(|&b| b != 0).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.units
    }

    /// Decode `start..end` (clamped) for display
    pub fn slice_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.units.len());
        let start = start.min(end);
        self.units[start..end].iter().map(|&b| decode_unit(b)).collect()
    }

    pub fn text(&self) -> String {
        self.slice_text(0, self.units.len())
    }
}

/// Latin-1 decode with C1 controls rendered as [`PLACEHOLDER`]
pub fn decode_unit(byte: u8) -> char {
    match byte {
        0x80..=0x9F => PLACEHOLDER,
        b => char::from(b),
    }
}

/// Encode a token into document units
///
/// Returns `None` for tokens with characters outside Latin-1; such a token can
/// never occur in a document.
pub fn encode_token(token: &str) -> Option<Cow<'_, [u8]>> {
    if token.is_ascii() {
        return Some(Cow::Borrowed(token.as_bytes()));
    }
    token
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>()
        .map(Cow::Owned)
}
