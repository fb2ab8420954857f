use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for one correlation scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Characters searched on each side of a text occurrence
    pub window_radius: usize,
    /// Characters on each side of a match kept in report snippets
    pub snippet_radius: usize,
    /// Winning distances below this are `high` confidence
    pub high_confidence_distance: usize,
    /// Winning distances below this are `medium` confidence
    pub medium_confidence_distance: usize,
    /// Score bonus per vote a font receives
    pub frequency_weight: f64,
    /// Populate the font vocabulary from style keywords found in the document
    pub discover_fonts: bool,
    /// Enable debug output
    pub debug_mode: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            window_radius: 1000,
            snippet_radius: 50,
            high_confidence_distance: 200,
            medium_confidence_distance: 500,
            frequency_weight: 10.0,
            discover_fonts: false,
            debug_mode: false,
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    pub fn with_snippet_radius(mut self, radius: usize) -> Self {
        self.snippet_radius = radius;
        self
    }

    /// Set the `high` and `medium` confidence distance thresholds.
    pub fn with_confidence_distances(mut self, high: usize, medium: usize) -> Self {
        self.high_confidence_distance = high;
        self.medium_confidence_distance = medium;
        self
    }

    pub fn with_frequency_weight(mut self, weight: f64) -> Self {
        self.frequency_weight = weight;
        self
    }

    pub fn with_discover_fonts(mut self, discover: bool) -> Self {
        self.discover_fonts = discover;
        self
    }

    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Reject threshold and weight combinations that cannot produce a sane ranking
    pub fn validate(&self) -> Result<()> {
        if self.medium_confidence_distance < self.high_confidence_distance {
            return Err(Error::Config(format!(
                "medium confidence distance ({}) is below high confidence distance ({})",
                self.medium_confidence_distance, self.high_confidence_distance
            )));
        }
        if !self.frequency_weight.is_finite() || self.frequency_weight < 0.0 {
            return Err(Error::Config(format!(
                "frequency weight must be a non-negative number, got {}",
                self.frequency_weight
            )));
        }
        Ok(())
    }
}
