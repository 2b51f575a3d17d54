// crates/infra/src/vcs/git.rs
//! Repository history through the `git` command line.
//!
//! Every query is independent: a failing command is logged and leaves its part of
//! [`RepositoryStats`] at the default value.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::Path,
    process::Command,
};

use chrono::{DateTime, Local};
use code_stats_domain::RepositoryStats;
use code_stats_ports::vcs::HistoryCollector;
use code_stats_shared_kernel::{InfraResult, InfrastructureError};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct GitHistoryCollector;

impl GitHistoryCollector {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(root: &Path) -> RepositoryStats {
        let mut stats = RepositoryStats::default();

        if run_git(root, &["rev-parse", "--is-inside-work-tree"]).is_err() {
            warn!(path = %root.display(), "not a git repository");
            return stats;
        }
        stats.is_repository = true;

        if let Some(count) = query(root, &["rev-list", "--count", "HEAD"]).and_then(|out| parse_count(&out)) {
            stats.commit_count = count;
        }

        if let Some(out) = query(root, &["shortlog", "-sn", "--all"]) {
            stats.contributors = parse_shortlog(&out);
            stats.contributor_count = stats.contributors.len();
        }

        stats.first_commit =
            query(root, &["log", "--reverse", "--format=%at", "--max-count=1"]).and_then(|out| parse_timestamp(&out));
        stats.last_commit = query(root, &["log", "--format=%at", "--max-count=1"]).and_then(|out| parse_timestamp(&out));

        if let Some(out) = query(root, &["log", "--format=%ad", "--date=short", "--all"]) {
            stats.active_days = count_active_days(&out);
        }

        if let Some(out) = query(root, &["log", "--numstat", "--pretty=tformat:"]) {
            let changes = parse_numstat(&out);
            stats.additions = changes.additions;
            stats.deletions = changes.deletions;
            stats.file_changes = changes.file_changes;
        }

        if let Some(out) = query(root, &["branch", "-a"]) {
            stats.branches = parse_branches(&out);
            stats.branch_count = stats.branches.len();
        }

        debug!(commits = stats.commit_count, contributors = stats.contributor_count, "git history collected");
        stats
    }
}

impl HistoryCollector for GitHistoryCollector {
    fn collect(&self, root: &Path) -> RepositoryStats {
        Self::analyze(root)
    }
}

fn run_git(root: &Path, args: &[&str]) -> InfraResult<String> {
    let operation = format!("git {}", args.join(" "));
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .map_err(|e| InfrastructureError::GitError { operation: operation.clone(), details: e.to_string() })?;
    if !output.status.success() {
        return Err(InfrastructureError::GitError {
            operation,
            details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn query(root: &Path, args: &[&str]) -> Option<String> {
    match run_git(root, args) {
        Ok(out) => Some(out),
        Err(err) => {
            warn!(error = %err, "git query failed");
            None
        }
    }
}

fn parse_count(out: &str) -> Option<usize> {
    out.trim().parse().ok()
}

/// `git shortlog -sn` の出力: `<count>\t<name>`
pub fn parse_shortlog(out: &str) -> BTreeMap<String, usize> {
    out.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let count = parts.next()?.parse().ok()?;
            let name = parts.collect::<Vec<_>>().join(" ");
            (!name.is_empty()).then_some((name, count))
        })
        .collect()
}

pub fn parse_timestamp(out: &str) -> Option<DateTime<Local>> {
    let secs: i64 = out.trim().parse().ok()?;
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(&Local))
}

pub fn count_active_days(out: &str) -> usize {
    out.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<HashSet<_>>().len()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineChanges {
    pub additions: usize,
    pub deletions: usize,
    pub file_changes: usize,
}

/// Sums `git log --numstat` rows. Binary rows (`-\t-\tpath`) count as a changed
/// file without line counts; unparsable rows are ignored.
pub fn parse_numstat(out: &str) -> LineChanges {
    let mut changes = LineChanges::default();
    for line in out.lines() {
        let mut fields = line.split_whitespace();
        let (Some(added), Some(deleted)) = (fields.next(), fields.next()) else {
            continue;
        };
        if added == "-" || deleted == "-" {
            changes.file_changes += 1;
            continue;
        }
        let (Ok(added), Ok(deleted)) = (added.parse::<usize>(), deleted.parse::<usize>()) else {
            continue;
        };
        changes.additions += added;
        changes.deletions += deleted;
        changes.file_changes += 1;
    }
    changes
}

/// Branch names from `git branch -a`. Remote branches collapse onto their local name.
pub fn parse_branches(out: &str) -> BTreeSet<String> {
    out.lines()
        .filter_map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').map_or(line, str::trim);
            if line.is_empty() {
                return None;
            }
            match line.strip_prefix("remotes/") {
                Some(remote) => remote.split_once('/').map(|(_, name)| name.to_string()),
                None => Some(line.to_string()),
            }
        })
        .collect()
}
