// domain analytics ranking utilities
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{DirectoryResult, FileRecord, Stat};

/// Number of files listed when no explicit limit is given.
pub const DEFAULT_TOP: usize = 20;

/// Label shown for files without an extension.
pub const NO_EXTENSION_LABEL: &str = "(none)";

/// 名前付きの集計行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    pub stat: Stat,
}

/// `0` は既定値 (20) として扱う
#[inline]
pub fn effective_top(top: usize) -> usize {
    if top == 0 { DEFAULT_TOP } else { top }
}

/// Language buckets, most code lines first.
pub fn languages_by_code(result: &DirectoryResult) -> Vec<GroupEntry> {
    let mut entries: Vec<GroupEntry> = result
        .languages
        .iter()
        .map(|(name, stat)| GroupEntry { name: name.clone(), stat: stat.clone() })
        .collect();
    entries.sort_by(|a, b| descending(a.stat.code_lines, b.stat.code_lines).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Extension buckets, most files first.
pub fn extensions_by_files(result: &DirectoryResult) -> Vec<GroupEntry> {
    let mut entries: Vec<GroupEntry> = result
        .extensions
        .iter()
        .map(|(ext, stat)| {
            let name = if ext.is_empty() { NO_EXTENSION_LABEL.to_string() } else { ext.clone() };
            GroupEntry { name, stat: stat.clone() }
        })
        .collect();
    entries.sort_by(|a, b| descending(a.stat.total_files, b.stat.total_files).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Largest files by size in bytes.
pub fn top_files_by_size(files: &[FileRecord], top: usize) -> Vec<FileRecord> {
    top_files(files, top, |r| r.stat().total_size)
}

/// Files with the most code lines.
pub fn top_files_by_code(files: &[FileRecord], top: usize) -> Vec<FileRecord> {
    top_files(files, top, |r| r.stat().code_lines as u64)
}

fn top_files<F>(files: &[FileRecord], top: usize, key: F) -> Vec<FileRecord>
where
    F: Fn(&FileRecord) -> u64,
{
    let mut ranked: Vec<&FileRecord> = files.iter().collect();
    ranked.sort_by(|a, b| descending(key(a), key(b)).then_with(|| a.path().cmp(b.path())));
    ranked.into_iter().take(effective_top(top)).cloned().collect()
}

#[inline]
fn descending<T: Ord>(a: T, b: T) -> Ordering {
    b.cmp(&a)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::analytics::Aggregator;

    fn record(path: &str, language: &str, size: u64, code: usize) -> FileRecord {
        let mut stat = Stat::single_file(size);
        stat.code_lines = code;
        stat.total_lines = code;
        FileRecord::new(PathBuf::from(path), language, stat)
    }

    fn sample() -> DirectoryResult {
        Aggregator::aggregate(
            PathBuf::from("."),
            vec![
                record("a.go", "Go", 300, 10),
                record("b.go", "Go", 100, 5),
                record("c.py", "Python", 50, 30),
                record("README", "Unknown", 900, 1),
                record("LICENSE", "Unknown", 10, 1),
            ],
        )
    }

    #[test]
    fn languages_sorted_by_code_lines() {
        let names: Vec<_> = languages_by_code(&sample()).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Python", "Go", "Unknown"]);
    }

    #[test]
    fn extensions_sorted_by_file_count_with_label_for_none() {
        let entries = extensions_by_files(&sample());
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, [NO_EXTENSION_LABEL, ".go", ".py"]);
        assert_eq!(entries[0].stat.total_files, 2);
    }

    #[test]
    fn top_files_respect_limit_and_break_ties_by_path() {
        let result = sample();
        let by_size: Vec<_> = top_files_by_size(&result.files, 2).iter().map(|r| r.path().to_path_buf()).collect();
        assert_eq!(by_size, [PathBuf::from("README"), PathBuf::from("a.go")]);

        let by_code = top_files_by_code(&result.files, 5);
        let tail: Vec<_> = by_code[3..].iter().map(|r| r.path().to_path_buf()).collect();
        assert_eq!(tail, [PathBuf::from("LICENSE"), PathBuf::from("README")]);
    }

    #[test]
    fn zero_top_means_default() {
        assert_eq!(effective_top(0), DEFAULT_TOP);
        assert_eq!(effective_top(3), 3);
        let files: Vec<_> = (0..30).map(|i| record(&format!("f{i:02}.rs"), "Rust", i, 1)).collect();
        assert_eq!(top_files_by_size(&files, 0).len(), DEFAULT_TOP);
    }
}
