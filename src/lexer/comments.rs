//! Comment-stripping pre-pass (RFC 7950 §6.1.1 "C-like" comments).
//!
//! A byte-by-byte state machine removes `//`-to-end-of-line and
//! `/* … */` comments while leaving comment-like bytes inside quoted
//! strings untouched, since a `'` or `"` delimited string may legally
//! contain `//` or `/*` text that is not a comment.

use crate::base::{Position, Span};
use crate::error::{Diagnostic, FrontError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    Escaped,
    LineComment,
    BlockComment,
}

/// Output of [`strip_comments`]: the cleaned text plus any recoverable
/// diagnostics found along the way (currently: an unterminated block
/// comment that ran off the end of input).
#[derive(Debug, Clone)]
pub struct StripOutcome {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Strip comments from raw YANG source text.
///
/// Preserves the newline that terminates a `//` comment (it is emitted,
/// not consumed) so a trailing line comment never joins the statement
/// below it onto the comment's line for diagnostic purposes.
pub fn strip_comments(text: &str) -> Result<StripOutcome, FrontError> {
    if text.is_empty() {
        return Err(FrontError::EmptyInput);
    }

    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(text.len());
    let mut state = State::Normal;
    let mut diagnostics = Vec::new();

    let mut line = 0usize;
    let mut col = 0usize;
    let block_comment_start = |l: usize, c: usize| Position::new(l, c);
    let mut block_start = Position::new(0, 0);

    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Normal => match b {
                b'"' => {
                    out.push(b'"');
                    state = State::DoubleQuoted;
                }
                b'\'' => {
                    out.push(b'\'');
                    state = State::SingleQuoted;
                }
                b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'/' => {
                    state = State::LineComment;
                    i += 1;
                    col += 1;
                }
                b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'*' => {
                    block_start = block_comment_start(line, col);
                    state = State::BlockComment;
                    i += 1;
                    col += 1;
                }
                _ => out.push(b),
            },
            State::SingleQuoted => {
                out.push(b);
                if b == b'\'' {
                    state = State::Normal;
                }
            }
            State::DoubleQuoted => {
                out.push(b);
                if b == b'\\' {
                    state = State::Escaped;
                } else if b == b'"' {
                    state = State::Normal;
                }
            }
            State::Escaped => {
                out.push(b);
                state = State::DoubleQuoted;
            }
            State::LineComment => {
                if b == b'\n' {
                    out.push(b'\n');
                    state = State::Normal;
                }
            }
            State::BlockComment => {
                if b == b'*' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
                    state = State::Normal;
                    i += 1;
                    col += 1;
                }
            }
        }

        if b == b'\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
        i += 1;
    }

    if state == State::BlockComment {
        let end = Position::new(line, col);
        diagnostics.push(Diagnostic::warning(
            "unterminated-block-comment",
            "block comment reached end of file without a closing `*/`",
            Span::new(block_start, end),
        ));
    }

    tracing::trace!(
        diagnostics = diagnostics.len(),
        input_len = text.len(),
        output_len = out.len(),
        "stripped comments"
    );

    let text = String::from_utf8(out)
        .expect("stripping comments only removes whole ASCII comment markers from valid UTF-8");

    Ok(StripOutcome { text, diagnostics })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(s: &str) -> String {
        strip_comments(s).unwrap().text
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(strip_comments(""), Err(FrontError::EmptyInput)));
    }

    #[test]
    fn strips_line_comment_preserving_newline() {
        let s = "leaf x; // trailing\nleaf y;";
        assert_eq!(stripped(s), "leaf x; \nleaf y;");
    }

    #[test]
    fn strips_block_comment() {
        let s = "leaf /* inline */ x;";
        assert_eq!(stripped(s), "leaf  x;");
    }

    #[test]
    fn preserves_comment_like_bytes_in_double_quoted_string() {
        let s = r#"description "this // is not a comment";"#;
        assert_eq!(stripped(s), s);
    }

    #[test]
    fn preserves_comment_like_bytes_in_single_quoted_string() {
        let s = "description 'still /* not a comment */ here';";
        assert_eq!(stripped(s), s);
    }

    #[test]
    fn escaped_quote_does_not_end_string_early() {
        let s = r#"description "a \" // b";"#;
        assert_eq!(stripped(s), s);
    }

    #[test]
    fn unterminated_block_comment_warns_and_recovers() {
        let s = "leaf x; /* never closed";
        let outcome = strip_comments(s).unwrap();
        assert_eq!(outcome.text, "leaf x; ");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].code, "unterminated-block-comment");
    }

    #[test]
    fn multiple_block_comments_on_one_line() {
        let s = "a/*1*/b/*2*/c;";
        assert_eq!(stripped(s), "abc;");
    }
}
