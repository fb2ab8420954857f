//! Last-resort font distribution for texts without positional evidence.

use std::collections::HashSet;

use crate::models::{Association, Method, TokenVocabulary};

/// Assign fonts to `unassociated` texts in order
///
/// Unused fonts are handed out one per text in vocabulary order; once they run
/// out every remaining text gets the first font of the vocabulary. Results are
/// always `low` confidence.
pub fn distribute(
    fonts: &TokenVocabulary,
    used: &HashSet<String>,
    unassociated: &[&str],
) -> Vec<Association> {
    let mut unused = fonts.distinct().filter(|f| !used.contains(*f));
    let first = fonts.distinct().next();

    unassociated
        .iter()
        .map(|text| match unused.next() {
            Some(font) => Association::fallback(text, Some(font), Method::FallbackDistribution),
            None => match first {
                Some(font) => Association::fallback(text, Some(font), Method::FallbackFirst),
                None => Association::fallback(text, None, Method::Unassigned),
            },
        })
        .collect()
}
