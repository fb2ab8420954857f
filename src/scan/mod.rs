//! Byte-proximity correlation of text tokens with font names.
//!
//! The pipeline runs normalize -> locate -> hints -> proximity -> aggregate ->
//! fallback. Everything here is scan-local and deterministic: the same bytes,
//! vocabularies and configuration always produce the same report.

pub mod aggregate;
pub mod batch;
pub mod fallback;
pub mod hints;
pub mod locate;
pub mod normalize;
pub mod proximity;
pub mod window;

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::font::discovery::discover_font_names;
use crate::models::{Association, Occurrence, ScanConfig, ScanReport, TokenVocabulary};
use crate::utils::file::read_source;
use crate::utils::logging::{EventSink, ScanEvent};

pub use batch::{scan_files, BatchOutcome};
pub use hints::{LayerFonts, Override};
pub use locate::{find_all, locate, Located};
pub use normalize::ByteDocument;
pub use proximity::{score_occurrence, Candidate};
pub use window::{extract, Context, Window};

/// Vocabularies and hints for one scan
#[derive(Debug, Clone)]
pub struct ScanInput {
    pub texts: TokenVocabulary,
    pub fonts: TokenVocabulary,
    /// Primary fonts from a structured metadata reader, consulted first
    pub layers: Vec<LayerFonts>,
    pub overrides: Vec<Override>,
}

impl ScanInput {
    pub fn new(texts: TokenVocabulary, fonts: TokenVocabulary) -> Self {
        Self {
            texts,
            fonts,
            layers: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub fn with_layers(mut self, layers: Vec<LayerFonts>) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<Override>) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Read, normalize and correlate one file
///
/// The only fatal condition is an unreadable input; nothing in the file's
/// content can make the scan fail.
pub fn scan_file(
    path: &Path,
    input: &ScanInput,
    config: &ScanConfig,
    sink: &mut dyn EventSink,
) -> Result<ScanReport> {
    config.validate()?;
    if config.debug_mode {
        log::debug!("Scanning {} with {:?}", path.display(), config);
    }
    let raw = read_source(path)?;
    Ok(scan_bytes(&raw, input, config, sink).with_source(path.display().to_string()))
}

/// Normalize raw bytes and correlate them
pub fn scan_bytes(
    raw: &[u8],
    input: &ScanInput,
    config: &ScanConfig,
    sink: &mut dyn EventSink,
) -> ScanReport {
    let doc = ByteDocument::normalize(raw);
    sink.record(ScanEvent::DocumentNormalized {
        input_len: raw.len(),
        output_len: doc.len(),
    });
    correlate(&doc, input, config, sink)
}

/// Associate every distinct text token with exactly one font
pub fn correlate(
    doc: &ByteDocument,
    input: &ScanInput,
    config: &ScanConfig,
    sink: &mut dyn EventSink,
) -> ScanReport {
    let mut fonts = input.fonts.clone();
    if config.discover_fonts {
        let discovered = discover_font_names(doc);
        sink.record(ScanEvent::FontsDiscovered { count: discovered.len() });
        // a text carrying a style word would otherwise match itself
        for name in discovered {
            if !input.texts.contains(&name) {
                fonts.push_unique(name);
            }
        }
    }

    let texts = locate(doc, &input.texts);
    let font_hits = locate(doc, &fonts);
    for located in texts.iter().chain(font_hits.iter()) {
        sink.record(ScanEvent::TokenLocated {
            token: located.token.to_string(),
            kind: located.kind,
            occurrences: located.occurrences.len(),
        });
    }

    let mut used: HashSet<String> = HashSet::new();
    let mut slots: Vec<Option<Association>> = Vec::with_capacity(texts.len());

    for text in &texts {
        let hint = hints::resolve(text.token, &input.layers, &input.overrides, &fonts, sink);
        let resolved = match hint {
            Some(mut hinted) => {
                hinted.snippet = text
                    .occurrences
                    .first()
                    .map(|o| window::snippet(doc, o.offset, o.len(), config.snippet_radius));
                Some(hinted)
            }
            None => associate_by_proximity(doc, text, &font_hits, config, sink),
        };

        if let Some(font) = resolved.as_ref().and_then(|a| a.font.clone()) {
            used.insert(font);
        }
        slots.push(resolved);
    }

    let unassociated: Vec<&str> = texts
        .iter()
        .zip(&slots)
        .filter(|(_, slot)| slot.is_none())
        .map(|(text, _)| text.token)
        .collect();
    let mut fallbacks = fallback::distribute(&fonts, &used, &unassociated).into_iter();

    let associations: Vec<Association> = texts
        .iter()
        .zip(slots)
        .filter_map(|(text, slot)| {
            let mut association = slot.or_else(|| fallbacks.next())?;
            if association.snippet.is_none() {
                association.snippet = text
                    .occurrences
                    .first()
                    .map(|o| window::snippet(doc, o.offset, o.len(), config.snippet_radius));
            }
            Some(association)
        })
        .collect();

    for association in &associations {
        sink.record(ScanEvent::AssociationChosen {
            text: association.text.clone(),
            font: association.font.clone(),
            method: association.method,
            confidence: association.confidence,
        });
    }

    let fonts_found = font_hits
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| f.token.to_string())
        .collect();

    ScanReport::new(doc.len(), fonts.len(), fonts_found, associations)
}

/// Score every occurrence of `text` and vote on a font
fn associate_by_proximity(
    doc: &ByteDocument,
    text: &Located<'_>,
    fonts: &[Located<'_>],
    config: &ScanConfig,
    sink: &mut dyn EventSink,
) -> Option<Association> {
    let mut votes: Vec<Candidate<'_>> = Vec::new();
    let mut voters: Vec<Occurrence<'_>> = Vec::new();

    for &occurrence in &text.occurrences {
        let ranked = score_occurrence(doc, occurrence, fonts, config.window_radius);
        for candidate in &ranked {
            sink.record(ScanEvent::CandidateScored {
                text: text.token.to_string(),
                text_offset: occurrence.offset,
                font: candidate.font.to_string(),
                min_distance: candidate.min_distance,
                count: candidate.count,
            });
        }
        match ranked.first() {
            Some(&winner) => {
                votes.push(winner);
                voters.push(occurrence);
            }
            None => sink.record(ScanEvent::OccurrenceWithoutFonts {
                text: text.token.to_string(),
                text_offset: occurrence.offset,
            }),
        }
    }

    let ranked = aggregate::aggregate(&votes, config.frequency_weight);
    for entry in &ranked {
        sink.record(ScanEvent::FontAggregated {
            text: text.token.to_string(),
            font: entry.score.font.clone(),
            count: entry.score.count,
            mean_distance: entry.score.mean_distance,
            min_distance: entry.score.min_distance,
            score: entry.score.score,
        });
    }

    let winner = ranked.first()?;
    let confidence = aggregate::confidence_of(&winner.score, config);

    // the closest vote for the winner anchors the audit snippet
    let snippet = votes
        .iter()
        .zip(&voters)
        .filter(|(vote, _)| vote.rank == winner.rank)
        .min_by_key(|(vote, _)| vote.min_distance)
        .map(|(vote, text_at)| {
            let start = text_at.offset.min(vote.nearest.offset);
            let end = text_at.end().max(vote.nearest.end());
            window::snippet(doc, start, end - start, config.snippet_radius)
        });

    let mut association = Association::proximity(
        text.token,
        ranked.into_iter().map(|entry| entry.score).collect(),
        confidence,
    )?;
    association.snippet = snippet;
    Some(association)
}
