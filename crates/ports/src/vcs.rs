// crates/ports/src/vcs.rs
use std::path::Path;

use code_stats_domain::RepositoryStats;

/// Port for repository history. Failures degrade to empty statistics.
pub trait HistoryCollector: Send + Sync {
    fn collect(&self, root: &Path) -> RepositoryStats;
}
