use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Stat;

/// Statistics of one scanned file. Built once by the classifier and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    path: PathBuf,
    language: String,
    extension: String,
    stat: Stat,
}

impl FileRecord {
    pub fn new(path: PathBuf, language: impl Into<String>, stat: Stat) -> Self {
        let extension = code_stats_shared_kernel::extension_of(&path);
        Self { path, language: language.into(), extension, stat }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Lowercase extension including the leading `.`, empty when the file has none.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn stat(&self) -> &Stat {
        &self.stat
    }
}
