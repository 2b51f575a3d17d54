use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Mergeable line/size counters plus the averages derived from them.
///
/// Only the counters are accumulated. [`Stat::calculate_averages`] derives the
/// averages from whatever the counters hold at the time of the call, so it must run
/// after the last [`Stat::merge`] into this record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub total_files: usize,
    pub total_size: u64,
    pub total_chars: usize,
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    averages: Option<Averages>,
}

/// Ratios derived from a finished [`Stat`]. A zero denominator yields `0.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// bytes per file
    pub avg_file_size: f64,
    /// characters per line
    pub avg_chars: f64,
    /// lines per file
    pub avg_lines: f64,
    /// code lines per line
    pub avg_code_lines: f64,
    /// comment lines per line
    pub avg_comment_lines: f64,
    /// blank lines per line
    pub avg_blank_lines: f64,
    pub code_density: f64,
    pub comment_density: f64,
    /// comment lines per code line
    pub comment_ratio: f64,
    pub avg_line_length: f64,
}

impl Stat {
    /// Empty record describing a single file, ready to be filled by a classifier.
    #[must_use]
    pub fn single_file(size: u64) -> Self {
        Self { total_files: 1, total_size: size, ..Self::default() }
    }

    /// Adds the counters of `other` into `self`. Averages are left untouched.
    pub fn merge(&mut self, other: &Stat) {
        self.total_files += other.total_files;
        self.total_size += other.total_size;
        self.total_chars += other.total_chars;
        self.total_lines += other.total_lines;
        self.code_lines += other.code_lines;
        self.comment_lines += other.comment_lines;
        self.blank_lines += other.blank_lines;
    }

    /// Recomputes the averages from the current counters.
    pub fn calculate_averages(&mut self) {
        let files = self.total_files as f64;
        let lines = self.total_lines as f64;
        let code = self.code_lines as f64;
        let comment = self.comment_lines as f64;
        let chars = self.total_chars as f64;

        self.averages = Some(Averages {
            avg_file_size: ratio(self.total_size as f64, files),
            avg_chars: ratio(chars, lines),
            avg_lines: ratio(lines, files),
            avg_code_lines: ratio(code, lines),
            avg_comment_lines: ratio(comment, lines),
            avg_blank_lines: ratio(self.blank_lines as f64, lines),
            code_density: ratio(code, lines),
            comment_density: ratio(comment, lines),
            comment_ratio: ratio(comment, code),
            avg_line_length: ratio(chars, lines),
        });
    }

    /// Averages, or `None` until [`Stat::calculate_averages`] has run.
    #[must_use]
    pub fn averages(&self) -> Option<&Averages> {
        self.averages.as_ref()
    }

    /// Whether two records carry identical counters, ignoring averages.
    #[must_use]
    pub fn same_counts(&self, other: &Stat) -> bool {
        self.total_files == other.total_files
            && self.total_size == other.total_size
            && self.total_chars == other.total_chars
            && self.total_lines == other.total_lines
            && self.code_lines == other.code_lines
            && self.comment_lines == other.comment_lines
            && self.blank_lines == other.blank_lines
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

impl AddAssign<&Stat> for Stat {
    fn add_assign(&mut self, rhs: &Stat) {
        self.merge(rhs);
    }
}

impl<'a> std::iter::Sum<&'a Stat> for Stat {
    fn sum<I: Iterator<Item = &'a Stat>>(iter: I) -> Self {
        iter.fold(Stat::default(), |mut acc, s| {
            acc.merge(s);
            acc
        })
    }
}
