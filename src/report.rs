// src/report.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use code_stats_domain::{
    DirectoryResult, FileRecord, RepositoryStats, Stat,
    analytics::{self, GroupEntry},
};
use code_stats_shared_kernel::logical_absolute;
use serde::Serialize;

/// Everything a renderer needs, ranked and ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub root: PathBuf,
    pub top: usize,
    pub summary: Stat,
    pub languages: Vec<GroupEntry>,
    pub extensions: Vec<GroupEntry>,
    pub largest_files: Vec<FileRecord>,
    pub most_code_files: Vec<FileRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryStats>,
}

impl Report {
    pub fn new(result: &DirectoryResult, top: usize) -> Self {
        let top = analytics::effective_top(top);
        Self {
            generated_at: Local::now(),
            root: logical_absolute(&result.root),
            top,
            summary: result.stat.clone(),
            languages: analytics::languages_by_code(result),
            extensions: analytics::extensions_by_files(result),
            largest_files: analytics::top_files_by_size(&result.files, top),
            most_code_files: analytics::top_files_by_code(&result.files, top),
            repository: None,
        }
    }

    pub fn with_repository(mut self, repository: Option<RepositoryStats>) -> Self {
        self.repository = repository;
        self
    }

    /// `path` relative to the scanned root when it lies below it.
    pub fn display_path(&self, record: &FileRecord) -> String {
        let path = logical_absolute(record.path());
        path.strip_prefix(&self.root).unwrap_or(record.path()).display().to_string()
    }
}
