//! The parsing pipeline: comment-stripped text to tokens, tokens to an
//! untyped statement tree ([`raw`]), the untyped tree to the typed
//! [`crate::ast::Statement`] tree ([`typed`]), and finally the top-level
//! module/submodule statement's children into ordered sections
//! ([`module`]).

pub mod module;
pub mod raw;
pub mod typed;

pub use module::{aggregate, ModuleSections};
pub use typed::convert_statement;

use crate::ast::{Identifier, Statement};
use crate::base::Span;
use crate::error::{Diagnostic, FrontError};
use crate::lexer::{strip_comments, tokenize};
use raw::Parser as RawParser;

/// A successfully parsed value plus whatever non-fatal diagnostics were
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

/// A parsed `module` or `submodule`, with its direct children already
/// partitioned into sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedModule {
    pub name: Identifier,
    pub is_submodule: bool,
    pub sections: ModuleSections,
    pub span: Span,
}

impl ParsedModule {
    /// All of this module's direct children, in source order.
    pub fn all_statements(&self) -> impl Iterator<Item = &Statement> {
        self.sections.all()
    }
}

/// Parse a single free-standing statement (any keyword). Used for
/// fixtures and for callers that want one typed node without a
/// surrounding module.
pub fn parse_statement(text: &str) -> Result<ParseOutcome<Statement>, FrontError> {
    let stripped = strip_comments(text)?;
    let mut diagnostics = stripped.diagnostics;
    let tokens = tokenize(&stripped.text);
    let raw = RawParser::new(&tokens).parse_statement()?;
    let value = convert_statement(raw, &mut diagnostics)?;
    Ok(ParseOutcome { value, diagnostics })
}

fn parse_top_level(text: &str, expected_keyword: &str) -> Result<ParseOutcome<ParsedModule>, FrontError> {
    let stripped = strip_comments(text)?;
    let mut diagnostics = stripped.diagnostics;
    let tokens = tokenize(&stripped.text);
    let raw = RawParser::new(&tokens).parse_statement()?;

    if raw.keyword.local_name() != expected_keyword {
        return Err(FrontError::UnexpectedStatement {
            span: raw.span,
            keyword: raw.keyword.to_string(),
        });
    }
    let span = raw.span;
    let statement = convert_statement(raw, &mut diagnostics)?;

    let (name, body) = match statement {
        Statement::Module(m) => (m.name, m.body),
        Statement::Submodule(m) => (m.name, m.body),
        // The keyword check above guarantees `convert_statement` produced
        // one of the two variants above.
        _ => unreachable!("top-level keyword was checked before conversion"),
    };

    let sections = aggregate(body, &mut diagnostics);
    Ok(ParseOutcome {
        value: ParsedModule { name, is_submodule: expected_keyword == "submodule", sections, span },
        diagnostics,
    })
}

/// Parse a complete `module { ... }` document.
pub fn parse_module(text: &str) -> Result<ParseOutcome<ParsedModule>, FrontError> {
    parse_top_level(text, "module")
}

/// Parse a complete `submodule { ... }` document.
pub fn parse_submodule(text: &str) -> Result<ParseOutcome<ParsedModule>, FrontError> {
    parse_top_level(text, "submodule")
}
