// src/config.rs
use std::path::PathBuf;

use code_stats_domain::ScanOptions;
use code_stats_shared_kernel::{CodeStatsError, DomainError, PresentationError, Result};

use crate::{args::Args, presentation::OutputFormat};

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    pub scan: ScanOptions,
    pub format: OutputFormat,
    pub top: usize,
    pub output: Option<PathBuf>,
    pub git: bool,
    pub progress: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = CodeStatsError;

    fn try_from(args: Args) -> Result<Self> {
        let mut builder = ScanOptions::builder();
        builder.max_workers(args.max_workers).follow_links(args.follow_links);
        if let Some(dirs) = args.exclude_dirs {
            builder.excluded_dirs(directory_names(dirs)?);
        }
        if let Some(exts) = args.exclude_exts {
            builder.excluded_extensions(non_empty(exts));
        }
        let scan = builder.build().map_err(|e| DomainError::InvalidConfiguration { reason: e.to_string() })?;

        Ok(Self {
            root: args.path,
            scan,
            format: args.format,
            top: args.top,
            output: args.output,
            git: args.git,
            progress: args.progress,
        })
    }
}

fn non_empty(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.trim().to_string()).filter(|v| !v.is_empty()).collect()
}

// 除外はベース名で比較するので区切り文字を含む値は一致し得ない
fn directory_names(values: Vec<String>) -> Result<Vec<String>> {
    let names = non_empty(values);
    if let Some(bad) = names.iter().find(|name| name.contains(['/', '\\'])) {
        return Err(PresentationError::InvalidValue {
            flag: "--exclude-dirs".to_string(),
            value: bad.clone(),
            reason: "expected a directory name, not a path".to_string(),
        }
        .into());
    }
    Ok(names)
}
