// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use code_stats_domain::ScanOptions;
use code_stats_ports::filesystem::FileEnumerator;
use code_stats_shared_kernel::{Result, extension_of};
use ignore::WalkBuilder;
use tracing::{debug, warn};

/// Filesystem adapter implementing the `FileEnumerator` port with a sequential,
/// name-sorted walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Regular files below `root` that survive the exclusion rules, in walk order.
    ///
    /// Entries that cannot be read are logged and skipped; the walk itself never fails.
    pub fn walk(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
        // ignore never filters the depth-0 entry, so the root name is checked here
        if root.file_name().is_some_and(|name| options.is_excluded_dir(&name.to_string_lossy())) {
            debug!(path = %root.display(), "skipping excluded directory");
            return Vec::new();
        }

        let mut builder = WalkBuilder::new(root);
        // .gitignore / hidden-file rules do not apply here; only the configured lists do.
        builder.standard_filters(false);
        builder.follow_links(options.follow_links);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        let dir_filter = options.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir && dir_filter.is_excluded_dir(&entry.file_name().to_string_lossy()) {
                debug!(path = %entry.path().display(), "skipping excluded directory");
                return false;
            }
            true
        });

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "walk error");
                    continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                debug!(path = %entry.path().display(), "skipping symbolic link");
                continue;
            }
            if !file_type.is_file() {
                continue;
            }
            if options.is_excluded_extension(&extension_of(entry.path())) {
                debug!(path = %entry.path().display(), "skipping excluded extension");
                continue;
            }
            files.push(entry.into_path());
        }
        files
    }
}

impl FileEnumerator for TreeWalker {
    fn collect(&self, root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
        Ok(Self::walk(root, options))
    }
}
