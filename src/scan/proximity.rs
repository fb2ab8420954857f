//! Per-occurrence proximity scoring.
//!
//! A font definition serialized right next to a text run is taken as evidence
//! that the font styles that run. For one text occurrence every font is scored
//! by its nearest occurrence inside the search window.

use std::cmp::Ordering;

use super::locate::Located;
use super::normalize::ByteDocument;
use super::window::Window;
use crate::models::{Occurrence, ProximityObservation};

/// One font's evidence around one text occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'v> {
    pub font: &'v str,
    /// Position of the font in its vocabulary
    pub rank: usize,
    pub min_distance: usize,
    /// Font occurrences inside the window
    pub count: usize,
    pub nearest: Occurrence<'v>,
}

impl<'v> Candidate<'v> {
    /// Closer first, then more frequent, then earlier in the vocabulary
    pub fn closeness_order(&self, other: &Self) -> Ordering {
        self.min_distance
            .cmp(&other.min_distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

/// Every (text, font) pair whose font occurrence lies inside `window`
///
/// A font occurrence sharing characters with the text itself is not evidence.
pub fn observations<'v>(
    text: Occurrence<'v>,
    font: &Located<'v>,
    window: Window,
) -> Vec<ProximityObservation<'v>> {
    // offsets are strictly increasing, so skip straight to the window start
    let first = font.occurrences.partition_point(|o| o.offset < window.start);
    font.occurrences[first..]
        .iter()
        .take_while(|o| o.offset < window.end)
        .filter(|o| window.contains_span(o.offset, o.len()))
        .filter(|o| o.end() <= text.offset || o.offset >= text.end())
        .map(|&o| ProximityObservation::new(text, o))
        .collect()
}

/// Rank the fonts found near one text occurrence
///
/// `fonts` must be in vocabulary order; fonts without an occurrence in range are
/// left out rather than scored as zero.
pub fn score_occurrence<'v>(
    doc: &ByteDocument,
    text: Occurrence<'v>,
    fonts: &[Located<'v>],
    window_radius: usize,
) -> Vec<Candidate<'v>> {
    let window = Window::around(doc, text.offset, text.len(), window_radius);

    let mut candidates: Vec<Candidate<'v>> = fonts
        .iter()
        .enumerate()
        .filter_map(|(rank, font)| {
            let observed = observations(text, font, window);
            let nearest = observed.iter().min_by_key(|o| o.distance)?;
            Some(Candidate {
                font: font.token,
                rank,
                min_distance: nearest.distance,
                count: observed.len(),
                nearest: nearest.font,
            })
        })
        .collect();

    candidates.sort_by(Candidate::closeness_order);
    candidates
}
