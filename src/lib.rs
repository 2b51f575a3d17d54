#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod progress;
pub mod report;

pub use app::{analyze_directory, analyze_directory_with_progress};
pub use code_stats_domain::{DirectoryResult, FileRecord, ScanOptions, Stat};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
