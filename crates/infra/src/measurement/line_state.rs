// crates/infra/src/measurement/line_state.rs
//! 行分類の状態機械
//!
//! Each line is Blank, Comment or Code. The only state carried between lines is
//! whether a block comment is open and which end marker closes it.

use std::io::{self, BufRead};

use code_stats_domain::{CommentStyle, Stat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    Normal,
    InBlockComment {
        end: &'static str,
    },
}

impl LineState {
    /// Classifies one line (without its terminator) and advances the state.
    ///
    /// A whitespace-only line is Blank even inside a block comment, and the state
    /// is left as it was.
    pub fn classify(&mut self, line: &str, style: Option<&CommentStyle>) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        let Some(style) = style else {
            return LineKind::Code;
        };

        if let LineState::InBlockComment { end } = *self {
            if trimmed.contains(end) {
                *self = LineState::Normal;
            }
            return LineKind::Comment;
        }

        if style.is_single_line_comment(trimmed) {
            return LineKind::Comment;
        }

        if let Some(end) = style.find_block_start(trimmed) {
            // 同一行に終端があればブロックに入らない
            if !trimmed.contains(end) {
                *self = LineState::InBlockComment { end };
            }
            return LineKind::Comment;
        }

        LineKind::Code
    }
}

/// Reads `reader` line by line and adds line, character and kind counts to `stat`.
///
/// Lines are split on `\n`; a trailing `\r` is dropped and a last line without a
/// newline still counts. Characters are the byte length of the line without its
/// terminator. Invalid UTF-8 is replaced before classification.
pub fn tally_lines<R: BufRead>(mut reader: R, style: Option<&CommentStyle>, stat: &mut Stat) -> io::Result<()> {
    let mut state = LineState::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let mut bytes = buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        let line = String::from_utf8_lossy(bytes);

        stat.total_lines += 1;
        stat.total_chars += bytes.len();
        match state.classify(&line, style) {
            LineKind::Blank => stat.blank_lines += 1,
            LineKind::Comment => stat.comment_lines += 1,
            LineKind::Code => stat.code_lines += 1,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use code_stats_domain::language::comment_style::{C_STYLE, HASH, MARKUP, PYTHON, RUBY};

    use super::LineKind::{Blank, Code, Comment};
    use super::*;

    fn kinds(lines: &[&str], style: Option<&CommentStyle>) -> Vec<LineKind> {
        let mut state = LineState::default();
        lines.iter().map(|line| state.classify(line, style)).collect()
    }

    fn tally(text: &str, style: Option<&CommentStyle>) -> Stat {
        let mut stat = Stat::single_file(text.len() as u64);
        tally_lines(text.as_bytes(), style, &mut stat).expect("in-memory read");
        stat
    }

    #[test]
    fn c_style_block_spanning_lines() {
        let got = kinds(&["/* start", "middle", "end */", "code();"], Some(&C_STYLE));
        assert_eq!(got, [Comment, Comment, Comment, Code]);
    }

    #[test]
    fn same_line_block_is_one_comment_and_closes() {
        let mut state = LineState::default();
        assert_eq!(state.classify("/* note */", Some(&C_STYLE)), Comment);
        assert_eq!(state, LineState::Normal);
        assert_eq!(state.classify("x++;", Some(&C_STYLE)), Code);
    }

    #[test]
    fn trailing_line_comment_is_code() {
        assert_eq!(kinds(&["int x = 1; // note"], Some(&C_STYLE)), [Code]);
    }

    #[test]
    fn code_before_block_start_still_counts_as_comment() {
        let got = kinds(&["int y; /* open", "still */", "z();"], Some(&C_STYLE));
        assert_eq!(got, [Comment, Comment, Code]);
    }

    #[test]
    fn blank_inside_block_is_blank_and_keeps_state() {
        let mut state = LineState::default();
        assert_eq!(state.classify("/*", Some(&C_STYLE)), Comment);
        assert_eq!(state.classify("   ", Some(&C_STYLE)), Blank);
        assert_eq!(state, LineState::InBlockComment { end: "*/" });
        assert_eq!(state.classify("text", Some(&C_STYLE)), Comment);
    }

    #[test]
    fn equal_start_and_end_markers_close_on_the_opening_line() {
        let got = kinds(&["\"\"\"", "doc body", "\"\"\"", "x = 1"], Some(&PYTHON));
        assert_eq!(got, [Comment, Code, Comment, Code]);
        assert_eq!(kinds(&["'''one liner'''", "y = 2"], Some(&PYTHON)), [Comment, Code]);
    }

    #[test]
    fn end_marker_anywhere_on_the_opening_line_closes_it() {
        let mut state = LineState::default();
        assert_eq!(state.classify("x */ y /* z", Some(&C_STYLE)), Comment);
        assert_eq!(state, LineState::Normal);
        assert_eq!(state.classify("next();", Some(&C_STYLE)), Code);
    }

    #[test]
    fn in_block_only_the_active_end_marker_closes() {
        let mut state = LineState::InBlockComment { end: "-->" };
        assert_eq!(state.classify("a */ b", Some(&MARKUP)), Comment);
        assert_eq!(state, LineState::InBlockComment { end: "-->" });
        assert_eq!(state.classify("c -->", Some(&MARKUP)), Comment);
        assert_eq!(state, LineState::Normal);
    }

    #[test]
    fn ruby_and_markup_blocks() {
        assert_eq!(kinds(&["=begin", "doc", "=end", "puts 1"], Some(&RUBY)), [Comment, Comment, Comment, Code]);
        assert_eq!(kinds(&["<!-- a", "b -->", "<p>"], Some(&MARKUP)), [Comment, Comment, Code]);
    }

    #[test]
    fn no_style_means_every_non_blank_line_is_code() {
        assert_eq!(kinds(&["# heading", "", "// x"], None), [Code, Blank, Code]);
    }

    #[test]
    fn tally_counts_lines_chars_and_kinds() {
        let stat = tally("# c\r\n\nx = 1\ny", Some(&HASH));
        assert_eq!(stat.total_lines, 4);
        assert_eq!(stat.comment_lines, 1);
        assert_eq!(stat.blank_lines, 1);
        assert_eq!(stat.code_lines, 2);
        assert_eq!(stat.total_chars, 3 + 0 + 5 + 1);
    }

    #[test]
    fn unterminated_block_runs_to_eof() {
        let stat = tally("x = 1;\n/* never closed\ncode();\n\nmore();\n", Some(&C_STYLE));
        assert_eq!(stat.total_lines, 5);
        assert_eq!(stat.code_lines, 1);
        assert_eq!(stat.comment_lines, 3);
        assert_eq!(stat.blank_lines, 1);
    }

    #[test]
    fn whitespace_only_file_is_all_blank() {
        let stat = tally("\n  \n\t\n", Some(&C_STYLE));
        assert_eq!((stat.total_lines, stat.blank_lines, stat.code_lines, stat.comment_lines), (3, 3, 0, 0));
    }

    #[test]
    fn tally_of_empty_input_is_zero() {
        let stat = tally("", Some(&C_STYLE));
        assert_eq!(stat.total_lines, 0);
        assert_eq!(stat.total_chars, 0);
    }

    #[test]
    fn tally_counts_bytes_and_survives_invalid_utf8() {
        let stat = tally("héllo 日本\n", None);
        assert_eq!(stat.total_chars, 13);

        let mut stat = Stat::default();
        tally_lines(&b"ok\r\n\xff\xfe\n"[..], None, &mut stat).unwrap();
        assert_eq!(stat.total_lines, 2);
        assert_eq!(stat.code_lines, 2);
        assert_eq!(stat.total_chars, 4);
    }
}
