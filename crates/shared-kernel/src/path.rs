use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Lowercase extension of the final path component, including the leading `.`.
///
/// Everything from the last `.` of the file name onward counts, so dotfiles such as
/// `.gitignore` are their own extension. Returns an empty string when the name has no `.`.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    name.rfind('.').map(|idx| name[idx..].to_lowercase()).unwrap_or_default()
}

/// Normalise a user supplied extension so it compares equal to [`extension_of`] output.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') { ext } else { format!(".{ext}") }
}
