// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use code_stats_domain::ScanOptions;
use code_stats_shared_kernel::Result;

/// Port for enumerating candidate files below a root.
///
/// Implementations apply the directory, extension and symlink rules of
/// [`ScanOptions`] and return regular files only. Per-entry walk failures are
/// skipped, never returned.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>>;
}
