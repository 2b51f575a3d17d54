use std::{collections::HashMap, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{FileRecord, Stat};

/// Aggregate of a whole scan: the tree total, every file, and per-language and
/// per-extension buckets.
///
/// `files` keeps the order in which workers finished; sort it explicitly when a
/// stable order matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryResult {
    pub root: PathBuf,
    pub stat: Stat,
    pub files: Vec<FileRecord>,
    pub languages: HashMap<String, Stat>,
    pub extensions: HashMap<String, Stat>,
}

impl DirectoryResult {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stat of one language bucket.
    pub fn language(&self, name: &str) -> Option<&Stat> {
        self.languages.get(name)
    }

    /// Stat of one extension bucket; `ext` uses the same lowercase `.ext` form as records.
    pub fn extension(&self, ext: &str) -> Option<&Stat> {
        self.extensions.get(ext)
    }
}
