//! Extension to language lookup.

pub mod comment_style;

use std::path::Path;

use code_stats_shared_kernel::extension_of;

pub use comment_style::CommentStyle;

/// Name reported for extensions the registry does not know.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Language for a `.ext` style extension. Matching ignores ASCII case.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        ".go" => "Go",
        ".java" => "Java",
        ".js" => "JavaScript",
        ".ts" => "TypeScript",
        ".jsx" => "React JSX",
        ".tsx" => "React TSX",
        ".py" => "Python",
        ".rb" => "Ruby",
        ".php" => "PHP",
        ".c" => "C",
        ".cpp" => "C++",
        ".h" => "C/C++ Header",
        ".hpp" => "C++ Header",
        ".cs" => "C#",
        ".swift" => "Swift",
        ".kt" => "Kotlin",
        ".rs" => "Rust",
        ".html" => "HTML",
        ".css" => "CSS",
        ".scss" => "SCSS",
        ".less" => "LESS",
        ".json" => "JSON",
        ".xml" => "XML",
        ".yaml" | ".yml" => "YAML",
        ".md" => "Markdown",
        ".txt" => "Text",
        ".sh" => "Shell",
        ".bat" => "Batch",
        ".ps1" => "PowerShell",
        ".sql" => "SQL",
        ".r" => "R",
        ".dart" => "Dart",
        ".lua" => "Lua",
        ".ex" | ".exs" => "Elixir",
        ".erl" | ".hrl" => "Erlang",
        ".clj" => "Clojure",
        ".elm" => "Elm",
        ".hs" => "Haskell",
        ".pl" | ".pm" => "Perl",
        _ => UNKNOWN_LANGUAGE,
    }
}

/// Language of the file at `path`, judged by its extension only.
pub fn language_for_path(path: &Path) -> &'static str {
    language_for_extension(&extension_of(path))
}
