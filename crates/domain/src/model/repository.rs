use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Version-control history summary gathered next to a scan.
///
/// Unrelated to the line statistics; a directory that is not a repository yields
/// the default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub is_repository: bool,
    pub commit_count: usize,
    pub contributor_count: usize,
    /// contributor name -> commit count
    pub contributors: BTreeMap<String, usize>,
    pub first_commit: Option<DateTime<Local>>,
    pub last_commit: Option<DateTime<Local>>,
    /// distinct calendar days with at least one commit
    pub active_days: usize,
    pub additions: usize,
    pub deletions: usize,
    pub file_changes: usize,
    pub branch_count: usize,
    pub branches: BTreeSet<String>,
}

impl RepositoryStats {
    /// Contributors ordered by commit count, highest first, ties by name.
    pub fn top_contributors(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.contributors.iter().map(|(name, count)| (name.as_str(), *count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}
