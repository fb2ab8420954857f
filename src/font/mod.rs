//! Font vocabularies: discovery from documents and loading from font files

pub mod discovery;
pub mod library;
pub mod weight;

pub use discovery::{discover_entries, discover_font_names, STYLE_KEYWORDS};
pub use library::{is_valid_font_file, read_font_entry, FontLibrary};
pub use weight::{determine_weight, is_italic_font};
