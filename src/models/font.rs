use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A font known to the correlator, either read from a font file or discovered in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    /// PostScript name, the token most design files embed
    pub postscript_name: String,
    /// Font family name
    pub family: String,
    /// Font subfamily (style variant)
    pub subfamily: String,
    /// Font weight value
    pub weight: u16,
    /// Whether the font is italic
    pub is_italic: bool,
    /// Source font file, absent for discovered names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
