//! Correlate font names with text layers in binary design files.
//!
//! Design files such as PSDs store text layers and the fonts that style them as
//! plain strings scattered through the binary. The text belongs to whichever
//! font name sits nearest to it. [`scan::correlate`] turns that observation into
//! one [`Association`] per text token, falling back to a deterministic spread of
//! unused fonts when no positional evidence exists.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod scan;
pub mod utils;

pub use error::{Error, Result};
pub use font::FontLibrary;
pub use models::{
    Association, Confidence, FontEntry, Method, ScanConfig, ScanReport, TokenVocabulary,
};
pub use scan::{
    correlate, scan_bytes, scan_file, scan_files, ByteDocument, LayerFonts, Override, ScanInput,
};
pub use utils::logging::{EventSink, LogSink, MemorySink, NullSink, ScanEvent};
