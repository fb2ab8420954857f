//! Data types shared by the scan pipeline

pub mod association;
pub mod config;
pub mod font;
pub mod report;
pub mod token;

pub use association::{combined_score, Association, Confidence, FontScore, Method};
pub use config::ScanConfig;
pub use font::FontEntry;
pub use report::{ScanReport, ScanSummary};
pub use token::{Occurrence, ProximityObservation, TokenKind, TokenVocabulary};
