//! Vote aggregation across every occurrence of one text token.

use std::collections::BTreeMap;

use super::proximity::Candidate;
use crate::models::{Confidence, FontScore, ScanConfig};

/// A font's aggregated score plus its vocabulary rank for tie-breaking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScore {
    pub rank: usize,
    pub score: FontScore,
}

/// Group per-occurrence winners by font and rank the fonts best first
///
/// Each vote is the winning [`Candidate`] of one text occurrence. Higher score
/// wins; equal scores go to the smaller minimum distance, then to the font
/// listed first in the vocabulary.
pub fn aggregate(votes: &[Candidate<'_>], frequency_weight: f64) -> Vec<RankedScore> {
    let mut by_font: BTreeMap<usize, (&str, Vec<usize>)> = BTreeMap::new();
    for vote in votes {
        by_font
            .entry(vote.rank)
            .or_insert_with(|| (vote.font, Vec::new()))
            .1
            .push(vote.min_distance);
    }

    let mut ranked: Vec<RankedScore> = by_font
        .into_iter()
        .filter_map(|(rank, (font, distances))| {
            FontScore::from_distances(font, &distances, frequency_weight)
                .map(|score| RankedScore { rank, score })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .score
            .total_cmp(&a.score.score)
            .then_with(|| a.score.min_distance.cmp(&b.score.min_distance))
            .then_with(|| a.rank.cmp(&b.rank))
    });
    ranked
}

/// Confidence tier of an aggregated winner
pub fn confidence_of(winner: &FontScore, config: &ScanConfig) -> Confidence {
    Confidence::from_distance(
        winner.min_distance,
        config.high_confidence_distance,
        config.medium_confidence_distance,
    )
}
