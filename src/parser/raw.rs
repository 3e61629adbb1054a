//! Stage one of parsing: tokens to a generic, untyped statement tree.
//!
//! Every YANG statement has the same shape regardless of keyword —
//! `keyword [argument] (';' | '{' statement* '}')` — so this stage knows
//! nothing about RFC 7950's per-keyword grammar. [`crate::parser::typed`]
//! is where a [`RawStmt`] becomes a [`crate::ast::Statement`]. The split
//! mirrors a syntax tree sitting underneath a typed view over it: this
//! raw tree is the untyped tree, `typed` is the view.

use crate::ast::Identifier;
use crate::base::Span;
use crate::error::FrontError;
use crate::lexer::primitives::{decode_double_quoted, decode_single_quoted};
use crate::lexer::{Kind, Token};

/// One generic statement: a keyword, an optional (already unquoted and
/// concatenated) argument, and either no body (`;`) or a list of child
/// statements (`{ ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct RawStmt {
    pub keyword: Identifier,
    pub argument: Option<RawArgument>,
    pub body: Option<Vec<RawStmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawArgument {
    pub text: String,
    pub span: Span,
}

pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse every statement at the top level (zero or more, back to
    /// back, with nothing else allowed between them).
    pub fn parse_all(&mut self) -> Result<Vec<RawStmt>, FrontError> {
        let mut out = Vec::new();
        while self.peek().is_some() {
            out.push(self.parse_statement()?);
        }
        Ok(out)
    }

    pub fn parse_statement(&mut self) -> Result<RawStmt, FrontError> {
        let kw_tok = self.bump().ok_or_else(|| FrontError::Expected {
            span: self.eof_span(),
            expected: "a statement keyword".to_string(),
            found: "end of input".to_string(),
        })?;
        if kw_tok.kind != Kind::Word {
            return Err(FrontError::Expected {
                span: kw_tok.span,
                expected: "a statement keyword".to_string(),
                found: format!("{:?}", kw_tok.kind),
            });
        }
        let keyword = Identifier::new(kw_tok.text, kw_tok.span)?;
        let start = kw_tok.span;

        let argument = self.parse_argument()?;

        match self.peek() {
            Some(t) if t.kind == Kind::Semi => {
                let end = t.span;
                self.bump();
                Ok(RawStmt { keyword, argument, body: None, span: start.merge(&end) })
            }
            Some(t) if t.kind == Kind::LBrace => {
                self.bump();
                let mut children = Vec::new();
                loop {
                    match self.peek() {
                        Some(t) if t.kind == Kind::RBrace => {
                            let end = t.span;
                            self.bump();
                            return Ok(RawStmt {
                                keyword,
                                argument,
                                body: Some(children),
                                span: start.merge(&end),
                            });
                        }
                        Some(_) => children.push(self.parse_statement()?),
                        None => {
                            return Err(FrontError::Expected {
                                span: start,
                                expected: "`}`".to_string(),
                                found: "end of input".to_string(),
                            })
                        }
                    }
                }
            }
            Some(t) => Err(FrontError::Expected {
                span: t.span,
                expected: "`;` or `{`".to_string(),
                found: format!("{:?} {:?}", t.kind, t.text),
            }),
            None => Err(FrontError::Expected {
                span: start,
                expected: "`;` or `{`".to_string(),
                found: "end of input".to_string(),
            }),
        }
    }

    fn parse_argument(&mut self) -> Result<Option<RawArgument>, FrontError> {
        match self.peek() {
            Some(t) if t.kind == Kind::Semi || t.kind == Kind::LBrace => Ok(None),
            Some(_) => {
                let (mut text, mut span) = self.parse_string_fragment()?;
                while let Some(t) = self.peek() {
                    if t.kind != Kind::Plus {
                        break;
                    }
                    self.bump();
                    let (next_text, next_span) = self.parse_string_fragment()?;
                    text.push_str(&next_text);
                    span = span.merge(&next_span);
                }
                Ok(Some(RawArgument { text, span }))
            }
            None => Ok(None),
        }
    }

    fn parse_string_fragment(&mut self) -> Result<(String, Span), FrontError> {
        let t = self.bump().ok_or_else(|| FrontError::Expected {
            span: self.eof_span(),
            expected: "a statement argument".to_string(),
            found: "end of input".to_string(),
        })?;
        match t.kind {
            Kind::Word => Ok((t.text.to_string(), t.span)),
            Kind::DqString => Ok((decode_double_quoted(t.text, t.span)?, t.span)),
            Kind::SqString => Ok((decode_single_quoted(t.text), t.span)),
            _ => Err(FrontError::Expected {
                span: t.span,
                expected: "a statement argument".to_string(),
                found: format!("{:?}", t.kind),
            }),
        }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&Token<'a>> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn eof_span(&self) -> Span {
        self.tokens.last().map(|t| t.span).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_one(src: &str) -> RawStmt {
        let toks = tokenize(src);
        Parser::new(&toks).parse_statement().unwrap()
    }

    #[test]
    fn bodyless_statement_with_unquoted_argument() {
        let stmt = parse_one("type string;");
        assert_eq!(stmt.keyword.to_string(), "type");
        assert_eq!(stmt.argument.unwrap().text, "string");
        assert!(stmt.body.is_none());
    }

    #[test]
    fn statement_with_quoted_argument_and_empty_body() {
        let stmt = parse_one(r#"leaf host-name { description "the host name"; }"#);
        assert_eq!(stmt.keyword.to_string(), "leaf");
        assert_eq!(stmt.argument.unwrap().text, "host-name");
        let body = stmt.body.unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].keyword.to_string(), "description");
        assert_eq!(body[0].argument.as_ref().unwrap().text, "the host name");
    }

    #[test]
    fn concatenated_string_argument_is_joined() {
        let stmt = parse_one(r#"description "a" + "b" + "c";"#);
        assert_eq!(stmt.argument.unwrap().text, "abc");
    }

    #[test]
    fn argument_less_statement() {
        let stmt = parse_one("input { leaf x { type string; } }");
        assert_eq!(stmt.keyword.to_string(), "input");
        assert!(stmt.argument.is_none());
        assert_eq!(stmt.body.unwrap().len(), 1);
    }

    #[test]
    fn unterminated_body_is_an_error() {
        let toks = tokenize("container c { leaf x { type string; }");
        assert!(Parser::new(&toks).parse_statement().is_err());
    }

    #[test]
    fn unknown_prefixed_keyword_parses_like_any_other_statement() {
        let stmt = parse_one(r#"tailf:callpoint "my-cp";"#);
        assert_eq!(stmt.keyword.to_string(), "tailf:callpoint");
        assert_eq!(stmt.argument.unwrap().text, "my-cp");
    }
}
