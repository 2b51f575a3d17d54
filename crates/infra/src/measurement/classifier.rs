// crates/infra/src/measurement/classifier.rs
use std::{fs::File, io::BufReader, path::Path};

use code_stats_domain::{CommentStyle, FileRecord, Stat, language_for_path};
use code_stats_ports::measurement::FileClassifier;
use code_stats_shared_kernel::{InfrastructureError, Result};

use super::line_state::tally_lines;

/// Classifies files on disk with the comment syntax of their language.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Measures one file. Size comes from metadata, the rest from a single read pass.
    pub fn measure(path: &Path) -> Result<FileRecord> {
        let language = language_for_path(path);

        let metadata = std::fs::metadata(path)
            .map_err(|source| InfrastructureError::FileMetadata { path: path.to_path_buf(), source })?;
        let mut stat = Stat::single_file(metadata.len());

        let file =
            File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        tally_lines(BufReader::new(file), CommentStyle::for_language(language), &mut stat)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

        stat.calculate_averages();
        Ok(FileRecord::new(path.to_path_buf(), language, stat))
    }
}

impl FileClassifier for LineClassifier {
    fn classify(&self, path: &Path) -> Result<FileRecord> {
        Self::measure(path)
    }
}
