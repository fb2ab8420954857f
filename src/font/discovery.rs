//! Candidate font names pulled straight out of a document.
//!
//! Design files embed PostScript names as plain ASCII runs. Any run carrying a
//! style keyword is a probable font name.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::bytes::{Regex, RegexBuilder};

use super::weight::{determine_weight, is_italic_font};
use crate::models::FontEntry;
use crate::scan::normalize::ByteDocument;

/// Style and weight words that mark a run as a font name
pub const STYLE_KEYWORDS: [&str; 12] = [
    "Bold",
    "Light",
    "Regular",
    "Italic",
    "Thin",
    "Medium",
    "Black",
    "Semibold",
    "Condensed",
    "Heavy",
    "Ultra",
    "Book",
];

/// Runs that look like names but are style flags
const IGNORED_NAMES: [&str; 2] = ["fauxbold false", "fauxitalic false"];

const MAX_NAME_LEN: usize = 50;

lazy_static! {
    static ref NAME_RUN: Regex = RegexBuilder::new(r"[A-Za-z0-9][A-Za-z0-9 _\-/]{2,}")
        .unicode(false)
        .build()
        .expect("static pattern");
}

fn has_style_keyword(run: &str) -> bool {
    STYLE_KEYWORDS.iter().any(|k| run.contains(k))
}

/// Sorted, deduplicated candidate font names found in `doc`
pub fn discover_font_names(doc: &ByteDocument) -> Vec<String> {
    let mut names = BTreeSet::new();

    for run in NAME_RUN.find_iter(doc.as_bytes()) {
        // the pattern only matches ASCII
        let Ok(run) = std::str::from_utf8(run.as_bytes()) else {
            continue;
        };
        if !has_style_keyword(run) {
            continue;
        }
        let name = run.trim().trim_matches('/').trim();
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            continue;
        }
        if IGNORED_NAMES.contains(&name.to_lowercase().as_str()) {
            continue;
        }
        names.insert(name.to_string());
    }

    names.into_iter().collect()
}

/// Discovered names with family, style and weight guessed from the name
pub fn discover_entries(doc: &ByteDocument) -> Vec<FontEntry> {
    discover_font_names(doc)
        .into_iter()
        .map(|name| entry_from_name(&name))
        .collect()
}

/// Split a PostScript-style name into family and subfamily at the first hyphen
pub fn entry_from_name(name: &str) -> FontEntry {
    let (family, subfamily) = match name.split_once('-') {
        Some((family, style)) if !family.is_empty() && !style.is_empty() => (family, style),
        _ => (name, "Regular"),
    };

    FontEntry {
        postscript_name: name.to_string(),
        family: family.to_string(),
        subfamily: subfamily.to_string(),
        weight: determine_weight(name),
        is_italic: is_italic_font(name),
        path: None,
    }
}
