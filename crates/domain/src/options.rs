use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use code_stats_shared_kernel::normalize_extension;

/// Worker count used when none (or zero) is configured.
pub const DEFAULT_WORKERS: usize = 4;

/// Directory names skipped at any depth unless the caller overrides the list.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git", "node_modules", "vendor", "dist", "build", "bin", "obj", "target", "out", "tmp", "temp", ".idea",
    ".vscode", ".vs", ".github", ".gitlab",
];

/// Binary, media, archive and lock-file extensions skipped by default.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    ".exe", ".dll", ".so", ".dylib", ".o", ".obj", ".a", ".lib", ".jar", ".war", ".ear", ".zip", ".tar", ".gz",
    ".rar", ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".ico", ".svg", ".mp3", ".mp4", ".avi", ".mkv", ".wav",
    ".flac", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".lock", ".sum", ".mod", ".toml", ".map",
];

/// Options recognised by a directory scan.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ScanOptions {
    #[builder(default = "default_excluded_dirs()")]
    pub excluded_dirs: Vec<String>,
    #[builder(default = "default_excluded_extensions()")]
    pub excluded_extensions: Vec<String>,
    #[builder(default = "DEFAULT_WORKERS")]
    pub max_workers: usize,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            excluded_extensions: default_excluded_extensions(),
            max_workers: DEFAULT_WORKERS,
            follow_links: false,
        }
    }
}

impl ScanOptions {
    pub fn builder() -> ScanOptionsBuilder {
        ScanOptionsBuilder::default()
    }

    /// 0 は既定のワーカー数として扱う
    pub fn effective_workers(&self) -> usize {
        if self.max_workers == 0 { DEFAULT_WORKERS } else { self.max_workers }
    }

    /// Whether a directory with base name `name` is pruned. Exact, case-sensitive match.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|dir| dir == name)
    }

    /// Whether `ext` (as produced by `extension_of`) is on the exclusion list.
    /// Entries written without a leading `.` or in upper case still match.
    pub fn is_excluded_extension(&self, ext: &str) -> bool {
        if ext.is_empty() {
            return false;
        }
        let ext = ext.to_lowercase();
        self.excluded_extensions.iter().any(|excluded| normalize_extension(excluded) == ext)
    }
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string).collect()
}

fn default_excluded_extensions() -> Vec<String> {
    DEFAULT_EXCLUDED_EXTENSIONS.iter().map(ToString::to_string).collect()
}
