pub mod file;
pub mod logging;
pub mod naming;

pub use file::{
    default_report_path, ensure_directory_exists, find_font_files, read_layer_hints, read_source,
    read_token_list, write_report,
};
pub use logging::{EventSink, LogSink, MemorySink, NullSink, ScanEvent};
pub use naming::{clean_font_name, clean_name, clean_snippet};
