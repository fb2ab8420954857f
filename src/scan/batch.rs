use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{scan_file, ScanInput};
use crate::error::Result;
use crate::models::{ScanConfig, ScanReport};
use crate::utils::logging::LogSink;

/// Result of scanning one file of a batch
#[derive(Debug)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<ScanReport>,
}

/// Scan several files with the same vocabularies in parallel
///
/// Scans share nothing mutable; each one logs through its own [`LogSink`].
/// Outcomes come back in input order and a failing file does not stop the others.
pub fn scan_files<P>(paths: &[P], input: &ScanInput, config: &ScanConfig) -> Vec<BatchOutcome>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            log::debug!("Scanning {}", path.display());
            let result = scan_file(path, input, config, &mut LogSink);
            if let Err(e) = &result {
                log::warn!("Scan of {} failed: {}", path.display(), e);
            }
            BatchOutcome {
                path: path.to_path_buf(),
                result,
            }
        })
        .collect()
}
