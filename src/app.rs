// src/app.rs
use std::path::Path;

use anyhow::{Context, Result};
use code_stats_domain::{DirectoryResult, ScanOptions};
use code_stats_infra::{FileWriter, GitHistoryCollector, LineClassifier, TreeWalker};
use code_stats_ports::{
    progress::{NoProgress, ProgressSink},
    vcs::HistoryCollector,
};
use code_stats_usecase::AnalyzeDirectory;
use tracing::info;

use crate::{config::AppConfig, presentation, progress::ConsoleProgress, report::Report};

/// Scans `root` with the filesystem walker and line classifier.
pub fn analyze_directory(root: &Path, options: &ScanOptions) -> code_stats_shared_kernel::Result<DirectoryResult> {
    analyze_directory_with_progress(root, options, &NoProgress)
}

pub fn analyze_directory_with_progress(
    root: &Path,
    options: &ScanOptions,
    progress: &dyn ProgressSink,
) -> code_stats_shared_kernel::Result<DirectoryResult> {
    let walker = TreeWalker::new();
    let classifier = LineClassifier::new();
    AnalyzeDirectory::new(&walker, &classifier).with_progress(progress).run(root, options)
}

pub fn run(config: &AppConfig) -> Result<()> {
    info!(root = %config.root.display(), workers = config.scan.effective_workers(), "analysis started");

    let progress: &dyn ProgressSink = if config.progress { &ConsoleProgress } else { &NoProgress };
    let result = analyze_directory_with_progress(&config.root, &config.scan, progress)
        .with_context(|| format!("failed to analyze {}", config.root.display()))?;

    let repository = config.git.then(|| GitHistoryCollector::new().collect(&config.root));
    let report = Report::new(&result, config.top).with_repository(repository);
    let rendered = presentation::render(&report, config.format)?;

    match &config.output {
        Some(path) => {
            FileWriter::atomic_write(path, rendered.as_bytes())?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
