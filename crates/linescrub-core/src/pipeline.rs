// crates/linescrub-core/src/pipeline.rs
//
// Per-line normalization. Pure: the outcome depends on the line's text only.
//
// Order (not commutative):
//  1. decode HTML entities
//  2. CRLF -> ' '
//  3. LF -> ' '
//  4. '`' -> '\''
//  5. delete `""""`
//  6. simple lowercase
//  7. trim ' " ; from both ends
//  8-10. quote, then unescape as a string literal (failure drops the line)
// 11. trim whitespace
// 12. empty -> skip

use std::fmt;

use crate::entities::decode_entities;
use crate::error::UnquoteError;
use crate::literal;

const EDGE_CUTSET: &[char] = &['\'', '"', ';'];

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Non-empty cleaned text, without the trailing newline.
    Emit(String),
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing was left after cleaning.
    Empty,
    /// The quoted-literal pass rejected the line.
    Malformed(UnquoteError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => f.write_str("empty after cleaning"),
            SkipReason::Malformed(e) => write!(f, "malformed escape: {e}"),
        }
    }
}

impl LineOutcome {
    pub fn emitted(&self) -> Option<&str> {
        match self {
            LineOutcome::Emit(s) => Some(s),
            LineOutcome::Skip(_) => None,
        }
    }
}

/// Run the whole pipeline over one raw line.
pub fn normalize_line(raw: &str) -> LineOutcome {
    let s = decode_entities(raw);
    let s = collapse_newlines(&s);
    let s = s.replace('`', "'");
    let s = s.replace(r#""""""#, "");
    let s = simple_lowercase(&s);
    let s = trim_edges(&s);

    let unescaped = match literal::unquote(&literal::quote(s)) {
        Ok(u) => u,
        Err(e) => return LineOutcome::Skip(SkipReason::Malformed(e)),
    };

    let out = unescaped.trim();
    if out.is_empty() {
        LineOutcome::Skip(SkipReason::Empty)
    } else {
        LineOutcome::Emit(out.to_string())
    }
}

/// CRLF first, then any remaining LF, each to a single space.
pub fn collapse_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace('\n', " ")
}

/// One char in, one char out. Where the full mapping expands (U+0130) the
/// first char is kept; no context-sensitive rules (final sigma) apply.
pub fn simple_lowercase(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

pub fn trim_edges(s: &str) -> &str {
    s.trim_matches(EDGE_CUTSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_per_char() {
        assert_eq!(simple_lowercase("ÀBÇ"), "àbç");
        assert_eq!(simple_lowercase("\u{130}"), "i");
        // No final-sigma rewrite.
        assert_eq!(simple_lowercase("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn trim_edges_is_greedy() {
        assert_eq!(trim_edges(r#"';"abc"';"#), "abc");
        assert_eq!(trim_edges(r#"a"b"#), r#"a"b"#);
        assert_eq!(trim_edges(r#" ;x; "#), r#" ;x; "#);
        assert_eq!(trim_edges(r#"''"#), "");
    }

    #[test]
    fn collapse_handles_crlf_before_lf() {
        assert_eq!(collapse_newlines("a\r\nb\nc"), "a b c");
        assert_eq!(collapse_newlines("a\r\n\nb"), "a  b");
        assert_eq!(collapse_newlines("lone\rcr"), "lone\rcr");
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::Empty.to_string(), "empty after cleaning");
        let r = SkipReason::Malformed(UnquoteError::TruncatedEscape(4));
        assert_eq!(r.to_string(), "malformed escape: truncated escape at byte 4");
    }
}
