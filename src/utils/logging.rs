//! Structured decision log for a scan.
//!
//! The pipeline reports every decision point to an [`EventSink`] supplied by the
//! caller. [`LogSink`] forwards to the `log` facade, [`MemorySink`] keeps events
//! for inspection and [`NullSink`] drops them.

use std::fmt;

use crate::models::{Confidence, Method, TokenKind};

/// One decision made while scanning
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    DocumentNormalized {
        input_len: usize,
        output_len: usize,
    },
    FontsDiscovered {
        count: usize,
    },
    TokenLocated {
        token: String,
        kind: TokenKind,
        occurrences: usize,
    },
    CandidateScored {
        text: String,
        text_offset: usize,
        font: String,
        min_distance: usize,
        count: usize,
    },
    OccurrenceWithoutFonts {
        text: String,
        text_offset: usize,
    },
    HintApplied {
        text: String,
        font: String,
        method: Method,
    },
    HintRejected {
        text: String,
        font: String,
        reason: String,
    },
    FontAggregated {
        text: String,
        font: String,
        count: usize,
        mean_distance: f64,
        min_distance: usize,
        score: f64,
    },
    AssociationChosen {
        text: String,
        font: Option<String>,
        method: Method,
        confidence: Confidence,
    },
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanEvent::DocumentNormalized { input_len, output_len } => {
                write!(f, "[NORMALIZE] {} bytes -> {} characters", input_len, output_len)
            }
            ScanEvent::FontsDiscovered { count } => {
                write!(f, "[DISCOVER] {} candidate font names", count)
            }
            ScanEvent::TokenLocated { token, kind, occurrences } => {
                write!(f, "[LOCATE] {} '{}': {} occurrences", kind, token, occurrences)
            }
            ScanEvent::CandidateScored { text, text_offset, font, min_distance, count } => write!(
                f,
                "[CANDIDATE] '{}'@{} <-> {} dist={} count={}",
                text, text_offset, font, min_distance, count
            ),
            ScanEvent::OccurrenceWithoutFonts { text, text_offset } => {
                write!(f, "[CANDIDATE] '{}'@{}: no font in window", text, text_offset)
            }
            ScanEvent::HintApplied { text, font, method } => {
                write!(f, "[HINT] '{}' -> {} ({})", text, font, method)
            }
            ScanEvent::HintRejected { text, font, reason } => {
                write!(f, "[HINT] '{}' -> {} rejected: {}", text, font, reason)
            }
            ScanEvent::FontAggregated { text, font, count, mean_distance, min_distance, score } => {
                write!(
                    f,
                    "[AGGREGATE] '{}' {}: {}x, mean={:.1}, min={}, score={:.2}",
                    text, font, count, mean_distance, min_distance, score
                )
            }
            ScanEvent::AssociationChosen { text, font, method, confidence } => write!(
                f,
                "[RESULT] '{}' -> {} ({}, {})",
                text,
                font.as_deref().unwrap_or("NONE"),
                method,
                confidence
            ),
        }
    }
}

/// Receives scan decisions
pub trait EventSink {
    fn record(&mut self, event: ScanEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: ScanEvent) {
        (**self).record(event)
    }
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: ScanEvent) {}
}

/// Keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub events: Vec<ScanEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: ScanEvent) {
        self.events.push(event);
    }
}

/// Forwards events to the `log` facade
///
/// Per-candidate chatter goes to `trace`, decisions to `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::CandidateScored { .. } | ScanEvent::OccurrenceWithoutFonts { .. } => {
                log::trace!("{}", event)
            }
            ScanEvent::HintRejected { .. } => log::warn!("{}", event),
            _ => log::debug!("{}", event),
        }
    }
}
