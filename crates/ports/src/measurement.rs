// crates/ports/src/measurement.rs
use std::path::Path;

use code_stats_domain::FileRecord;
use code_stats_shared_kernel::Result;

/// Port producing the statistics of a single file.
pub trait FileClassifier: Send + Sync {
    fn classify(&self, path: &Path) -> Result<FileRecord>;
}
