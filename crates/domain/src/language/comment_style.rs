//! Comment syntax per language, kept as plain static data.

/// Comment delimiters of one language.
///
/// `multi_line` pairs each block start marker with the end marker that closes it.
/// Order matters: the classifier takes the first start marker found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub single_line: &'static [&'static str],
    pub multi_line: &'static [(&'static str, &'static str)],
}

impl CommentStyle {
    /// Whether `line` is a full-line comment: the text before the first marker
    /// occurrence is blank. A marker trailing code does not qualify.
    pub fn is_single_line_comment(&self, line: &str) -> bool {
        self.single_line
            .iter()
            .any(|marker| line.split_once(marker).is_some_and(|(prefix, _)| prefix.trim().is_empty()))
    }

    /// End marker paired with the first block start marker contained in `line`.
    pub fn find_block_start(&self, line: &str) -> Option<&'static str> {
        self.multi_line.iter().find(|(start, _)| line.contains(start)).map(|(_, end)| *end)
    }

    /// Comment style for `language`, or `None` when the language has no known syntax.
    ///
    /// Languages missing here count every non-blank line as code.
    pub fn for_language(language: &str) -> Option<&'static CommentStyle> {
        let style = match language {
            "Go" | "Java" | "JavaScript" | "TypeScript" | "C" | "C++" | "C#" | "Rust" => &C_STYLE,
            "Python" => &PYTHON,
            "Ruby" => &RUBY,
            "PHP" => &PHP,
            "HTML" => &MARKUP,
            "CSS" => &CSS,
            "Shell" => &HASH,
            "SQL" => &SQL,
            _ => return None,
        };
        Some(style)
    }
}

/// `//` と `/* */`
pub const C_STYLE: CommentStyle = CommentStyle { single_line: &["//"], multi_line: &[("/*", "*/")] };

pub const PYTHON: CommentStyle =
    CommentStyle { single_line: &["#"], multi_line: &[("'''", "'''"), ("\"\"\"", "\"\"\"")] };

/// `#` と `=begin` ～ `=end`
pub const RUBY: CommentStyle = CommentStyle { single_line: &["#"], multi_line: &[("=begin", "=end")] };

pub const PHP: CommentStyle = CommentStyle { single_line: &["//", "#"], multi_line: &[("/*", "*/")] };

pub const MARKUP: CommentStyle = CommentStyle { single_line: &[], multi_line: &[("<!--", "-->")] };

pub const CSS: CommentStyle = CommentStyle { single_line: &[], multi_line: &[("/*", "*/")] };

pub const HASH: CommentStyle = CommentStyle { single_line: &["#"], multi_line: &[] };

pub const SQL: CommentStyle = CommentStyle { single_line: &["--"], multi_line: &[("/*", "*/")] };
