use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregated statistics for one (text, font) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontScore {
    pub font: String,
    /// Number of votes (always at least one)
    pub count: usize,
    pub min_distance: usize,
    pub mean_distance: f64,
    pub score: f64,
}

impl FontScore {
    /// Build a score from the distances observed for one font
    ///
    /// Returns `None` when `distances` is empty: a font without evidence is not scored.
    pub fn from_distances(font: &str, distances: &[usize], frequency_weight: f64) -> Option<Self> {
        let min_distance = *distances.iter().min()?;
        let count = distances.len();
        let mean_distance = distances.iter().sum::<usize>() as f64 / count as f64;

        Some(Self {
            font: font.to_string(),
            count,
            min_distance,
            mean_distance,
            score: combined_score(mean_distance, count, frequency_weight),
        })
    }
}

/// Proximity dominates; every vote adds `frequency_weight`
pub fn combined_score(mean_distance: f64, count: usize, frequency_weight: f64) -> f64 {
    1000.0 / (mean_distance + 1.0) + count as f64 * frequency_weight
}

/// How an association was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Primary font list from a structured metadata reader
    Metadata,
    /// Caller-supplied priority entry
    Override,
    Proximity,
    FallbackDistribution,
    FallbackFirst,
    /// No font vocabulary to draw from
    Unassigned,
}

impl Method {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Method::FallbackDistribution | Method::FallbackFirst | Method::Unassigned)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Metadata => "metadata",
            Method::Override => "override",
            Method::Proximity => "proximity",
            Method::FallbackDistribution => "fallback_distribution",
            Method::FallbackFirst => "fallback_first",
            Method::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse trust bucket for an association
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Bucket a winning distance against the configured thresholds
    pub fn from_distance(distance: usize, high: usize, medium: usize) -> Self {
        if distance < high {
            Confidence::High
        } else if distance < medium {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// The font chosen for one distinct text token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub text: String,
    pub font: Option<String>,
    pub method: Method,
    pub confidence: Confidence,
    /// Winning statistics, present only for proximity associations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FontScore>,
    /// Runner-up fonts considered during aggregation, best first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<FontScore>,
    /// Cleaned document excerpt around the evidence, for auditing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Association {
    pub fn proximity(text: &str, ranked: Vec<FontScore>, confidence: Confidence) -> Option<Self> {
        let mut ranked = ranked.into_iter();
        let winner = ranked.next()?;
        Some(Self {
            text: text.to_string(),
            font: Some(winner.font.clone()),
            method: Method::Proximity,
            confidence,
            stats: Some(winner),
            candidates: ranked.collect(),
            snippet: None,
        })
    }

    pub fn hinted(text: &str, font: &str, method: Method) -> Self {
        Self {
            text: text.to_string(),
            font: Some(font.to_string()),
            method,
            confidence: Confidence::High,
            stats: None,
            candidates: Vec::new(),
            snippet: None,
        }
    }

    pub fn fallback(text: &str, font: Option<&str>, method: Method) -> Self {
        Self {
            text: text.to_string(),
            font: font.map(String::from),
            method,
            confidence: Confidence::Low,
            stats: None,
            candidates: Vec::new(),
            snippet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_from_distances() {
        let score = FontScore::from_distances("X", &[50, 100, 150], 10.0).unwrap();
        assert_eq!(score.count, 3);
        assert_eq!(score.min_distance, 50);
        assert!((score.mean_distance - 100.0).abs() < f64::EPSILON);
        assert!((score.score - (1000.0 / 101.0 + 30.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_distances_are_not_scored() {
        assert!(FontScore::from_distances("X", &[], 10.0).is_none());
    }

    #[test]
    fn confidence_buckets() {
        assert_eq!(Confidence::from_distance(0, 200, 500), Confidence::High);
        assert_eq!(Confidence::from_distance(199, 200, 500), Confidence::High);
        assert_eq!(Confidence::from_distance(200, 200, 500), Confidence::Medium);
        assert_eq!(Confidence::from_distance(499, 200, 500), Confidence::Medium);
        assert_eq!(Confidence::from_distance(500, 200, 500), Confidence::Low);
    }

    #[test]
    fn method_labels_serialize_snake_case() {
        let json = serde_json::to_string(&Method::FallbackDistribution).unwrap();
        assert_eq!(json, "\"fallback_distribution\"");
        assert_eq!(Method::FallbackFirst.to_string(), "fallback_first");
        assert!(Method::FallbackFirst.is_fallback());
        assert!(!Method::Proximity.is_fallback());
    }
}
