use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use code_stats_domain::{DirectoryResult, FileRecord, ScanOptions, analytics::Aggregator};
use code_stats_ports::{
    filesystem::FileEnumerator,
    measurement::FileClassifier,
    progress::{NoProgress, ProgressSink},
};
use code_stats_shared_kernel::{ApplicationError, InfrastructureError, Result};
use tracing::{debug, info, warn};

/// Scans a directory tree: enumerate, classify on a fixed worker pool, aggregate.
pub struct AnalyzeDirectory<'a> {
    enumerator: &'a dyn FileEnumerator,
    classifier: &'a dyn FileClassifier,
    progress: &'a dyn ProgressSink,
}

/// Results shared by the workers. One lock covers both fields so the progress
/// count always matches the number of stored records.
struct Collected {
    records: Vec<FileRecord>,
    processed: usize,
}

impl<'a> AnalyzeDirectory<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator, classifier: &'a dyn FileClassifier) -> Self {
        Self { enumerator, classifier, progress: &NoProgress }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Runs the scan below `root`.
    ///
    /// Fails only when `root` is missing, not a directory, or the worker pool
    /// cannot be built. Files that fail to classify are logged and left out.
    pub fn run(&self, root: &Path, options: &ScanOptions) -> Result<DirectoryResult> {
        validate_root(root)?;

        let files = self.enumerator.collect(root, options)?;
        let total = files.len();
        info!(root = %root.display(), files = total, "scanning directory");

        let records = if files.is_empty() {
            Vec::new()
        } else {
            self.classify_all(files, options.effective_workers())?
        };

        let result = Aggregator::aggregate(root.to_path_buf(), records);
        info!(
            files = result.stat.total_files,
            skipped = total - result.stat.total_files,
            lines = result.stat.total_lines,
            "scan finished"
        );
        Ok(result)
    }

    fn classify_all(&self, files: Vec<PathBuf>, workers: usize) -> Result<Vec<FileRecord>> {
        let total = files.len();

        // 全パスを先に積んでから送信側を閉じる
        let (tx, rx) = crossbeam_channel::bounded(total);
        for path in files {
            if tx.send(path).is_err() {
                break;
            }
        }
        drop(tx);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("code-stats-worker-{i}"))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;
        debug!(workers, total, "worker pool ready");

        let shared = Mutex::new(Collected { records: Vec::with_capacity(total), processed: 0 });

        pool.scope(|scope| {
            for _ in 0..workers {
                let rx = rx.clone();
                let shared = &shared;
                scope.spawn(move |_| {
                    for path in rx.iter() {
                        match self.classifier.classify(&path) {
                            Ok(record) => {
                                let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
                                guard.records.push(record);
                                guard.processed += 1;
                                self.progress.on_progress(guard.processed, total);
                            }
                            Err(err) => warn!(path = %path.display(), error = %err, "failed to analyze file"),
                        }
                    }
                });
            }
        });
        self.progress.on_complete(total);

        let collected = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        Ok(collected.records)
    }
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ApplicationError::RootNotFound { path: root.to_path_buf() },
        _ => ApplicationError::RootInaccessible { path: root.to_path_buf(), source },
    })?;
    if !metadata.is_dir() {
        return Err(ApplicationError::NotADirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}
