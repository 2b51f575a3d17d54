use std::{collections::HashMap, path::PathBuf};

use crate::model::{DirectoryResult, FileRecord, Stat};

/// Folds per-file records into a [`DirectoryResult`].
pub struct Aggregator;

impl Aggregator {
    /// Merges every record into the tree total and its language and extension
    /// buckets, then finalises the averages of all of them.
    ///
    /// Counters are plain sums, so the outcome does not depend on record order.
    pub fn aggregate(root: PathBuf, files: Vec<FileRecord>) -> DirectoryResult {
        let mut stat = Stat::default();
        let mut languages: HashMap<String, Stat> = HashMap::new();
        let mut extensions: HashMap<String, Stat> = HashMap::new();

        for record in &files {
            stat.merge(record.stat());
            languages.entry(record.language().to_string()).or_default().merge(record.stat());
            extensions.entry(record.extension().to_string()).or_default().merge(record.stat());
        }

        stat.calculate_averages();
        languages.values_mut().for_each(Stat::calculate_averages);
        extensions.values_mut().for_each(Stat::calculate_averages);

        DirectoryResult { root, stat, files, languages, extensions }
    }
}
