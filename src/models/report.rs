use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::association::{Association, Method};

/// Counts describing one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Distinct font tokens in the vocabulary
    pub total_fonts: usize,
    /// Distinct text tokens in the vocabulary
    pub total_text_layers: usize,
    /// Texts that received a font by any method
    pub association_success: usize,
    /// Texts associated from positional evidence
    pub proximity_associations: usize,
    /// Texts that only received a fallback font
    pub fallback_associations: usize,
}

/// Result of a correlation scan, keyed by text token in vocabulary order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub extraction_method: String,
    /// Number of characters left after normalization
    pub document_length: usize,
    pub summary: ScanSummary,
    /// Font tokens that occur at least once in the document
    pub fonts_found: Vec<String>,
    pub associations: IndexMap<String, Association>,
}

impl ScanReport {
    pub const EXTRACTION_METHOD: &'static str = "byte_proximity";

    pub(crate) fn new(
        document_length: usize,
        total_fonts: usize,
        fonts_found: Vec<String>,
        associations: Vec<Association>,
    ) -> Self {
        let summary = ScanSummary {
            total_fonts,
            total_text_layers: associations.len(),
            association_success: associations.iter().filter(|a| a.font.is_some()).count(),
            proximity_associations: associations
                .iter()
                .filter(|a| a.method == Method::Proximity)
                .count(),
            fallback_associations: associations
                .iter()
                .filter(|a| a.method.is_fallback() && a.font.is_some())
                .count(),
        };

        Self {
            source_file: None,
            extraction_method: Self::EXTRACTION_METHOD.to_string(),
            document_length,
            summary,
            fonts_found,
            associations: associations
                .into_iter()
                .map(|a| (a.text.clone(), a))
                .collect(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_file = Some(source.into());
        self
    }

    /// Font chosen for `text`, if the text is known and was assigned one
    pub fn font_for(&self, text: &str) -> Option<&str> {
        self.associations.get(text)?.font.as_deref()
    }

    pub fn association(&self, text: &str) -> Option<&Association> {
        self.associations.get(text)
    }

    /// Plain `text -> font` mapping, the shape most callers persist
    pub fn mapping(&self) -> IndexMap<String, Option<String>> {
        self.associations
            .iter()
            .map(|(text, a)| (text.clone(), a.font.clone()))
            .collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
