#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod language;
pub mod model;
pub mod options;

pub use language::{CommentStyle, UNKNOWN_LANGUAGE, language_for_extension, language_for_path};
pub use model::{Averages, DirectoryResult, FileRecord, RepositoryStats, Stat};
pub use options::{DEFAULT_WORKERS, ScanOptions, ScanOptionsBuilder};
