//! Associations known before any proximity scoring.
//!
//! Two sources pre-empt the byte heuristic: the primary font list a structured
//! metadata reader produced for a text layer, and caller-supplied overrides.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{Association, Method, TokenVocabulary};
use crate::utils::logging::{EventSink, ScanEvent};
use crate::utils::naming::clean_font_name;

/// Primary fonts a structured reader reported for one text layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFonts {
    pub text: String,
    pub fonts: Vec<String>,
}

/// Caller-supplied `text -> font` priority entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub text: String,
    pub font: String,
}

impl Override {
    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
        }
    }
}

impl FromStr for Override {
    type Err = Error;

    /// Parse `TEXT=FONT`, splitting at the first `=`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((text, font)) if !text.trim().is_empty() && !font.trim().is_empty() => {
                Ok(Override::new(text.trim(), font.trim()))
            }
            _ => Err(Error::Config(format!("override must look like TEXT=FONT, got '{}'", s))),
        }
    }
}

/// Resolve the hint for `text`, metadata first
pub fn resolve(
    text: &str,
    layers: &[LayerFonts],
    overrides: &[Override],
    fonts: &TokenVocabulary,
    sink: &mut dyn EventSink,
) -> Option<Association> {
    let from_metadata = layers
        .iter()
        .filter(|layer| layer.text == text)
        .flat_map(|layer| layer.fonts.iter())
        .find_map(|font| clean_font_name(font));
    if let Some(font) = from_metadata {
        sink.record(ScanEvent::HintApplied {
            text: text.to_string(),
            font: font.clone(),
            method: Method::Metadata,
        });
        return Some(Association::hinted(text, &font, Method::Metadata));
    }

    for entry in overrides.iter().filter(|o| o.text == text) {
        if fonts.contains(&entry.font) {
            sink.record(ScanEvent::HintApplied {
                text: text.to_string(),
                font: entry.font.clone(),
                method: Method::Override,
            });
            return Some(Association::hinted(text, &entry.font, Method::Override));
        }
        sink.record(ScanEvent::HintRejected {
            text: text.to_string(),
            font: entry.font.clone(),
            reason: "font not in vocabulary".to_string(),
        });
    }
    None
}
