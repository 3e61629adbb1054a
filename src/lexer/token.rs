//! Logos-based tokenizer over comment-stripped YANG source.
//!
//! The token alphabet is deliberately coarse: `{`, `}`, `;`, `+`, a quoted
//! string of each kind, and a catch-all `Word` for everything else
//! (bare identifiers, keywords, unquoted string arguments, numbers,
//! dates — RFC 7950's grammar tells these apart by *context*, not by
//! lexical shape, so the typed argument parsers in
//! [`crate::lexer::primitives`] do that work, not the lexer).
//!
//! Skips whitespace outright rather than preserving trivia, since nothing
//! downstream needs a lossless round trip.

use crate::base::{LineIndex, Span};
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Kind {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(";")]
    Semi,

    #[token("+")]
    Plus,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DqString,

    #[regex(r"'[^']*'")]
    SqString,

    #[regex(r"[^ \t\r\n{};\"'+]+")]
    Word,
}

/// A single token: its kind, exact source text, and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: Kind,
    pub text: &'a str,
    pub span: Span,
}

/// Tokenize the full input, converting byte offsets to line/column via a
/// [`LineIndex`] built once up front.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let line_index = LineIndex::new(input);
    let mut lexer = Kind::lexer(input);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = line_index.line_col(range.start);
        let end = line_index.line_col(range.end);
        let kind = match result {
            Ok(k) => k,
            Err(()) => continue, // unreachable: Word matches any non-special byte
        };
        out.push(Token {
            kind,
            text: lexer.slice(),
            span: Span::new(start, end),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_statement_shape() {
        let toks = tokenize("leaf host-name { type string; }");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Kind::Word,
                Kind::Word,
                Kind::LBrace,
                Kind::Word,
                Kind::Word,
                Kind::Semi,
                Kind::RBrace,
            ]
        );
    }

    #[test]
    fn quoted_strings_keep_their_delimiters_in_text() {
        let toks = tokenize(r#"description "hello world";"#);
        assert_eq!(toks[1].kind, Kind::DqString);
        assert_eq!(toks[1].text, "\"hello world\"");
    }

    #[test]
    fn prefixed_identifier_is_one_word() {
        let toks = tokenize("type sys:percentage;");
        assert_eq!(toks[1].text, "sys:percentage");
    }

    #[test]
    fn concatenation_tokens() {
        let toks = tokenize("\"a\" + \"b\"");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Kind::DqString, Kind::Plus, Kind::DqString]);
    }
}
