//! Error and diagnostic taxonomy for the YANG front-end.
//!
//! Two shapes exist, mirroring the split between conditions that abort a
//! parse and conditions a caller should simply be told about:
//!
//! - [`FrontError`] — returned from a `Result`, aborts the enclosing parse.
//! - [`Diagnostic`] — accumulated and returned alongside a successful
//!   result (unresolved references, duplicate statements, a block comment
//!   that ran off the end of the file).

use crate::base::Span;
use thiserror::Error;

/// Fatal errors that abort parsing at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontError {
    #[error("{span}: malformed string literal: {reason}")]
    Lexical { span: Span, reason: String },

    #[error("{span}: invalid identifier {text:?}: {reason}")]
    InvalidIdentifier {
        span: Span,
        text: String,
        reason: String,
    },

    #[error("{span}: invalid date {text:?}: {reason}")]
    InvalidDate {
        span: Span,
        text: String,
        reason: String,
    },

    #[error("{span}: invalid argument for `{keyword}`: {text:?} ({reason})")]
    InvalidArgument {
        span: Span,
        keyword: String,
        text: String,
        reason: String,
    },

    #[error("{span}: unexpected statement `{keyword}`")]
    UnexpectedStatement { span: Span, keyword: String },

    #[error("{span}: expected {expected}, found {found}")]
    Expected {
        span: Span,
        expected: String,
        found: String,
    },

    #[error("empty input")]
    EmptyInput,
}

impl FrontError {
    pub fn span(&self) -> Option<Span> {
        match self {
            FrontError::Lexical { span, .. }
            | FrontError::InvalidIdentifier { span, .. }
            | FrontError::InvalidDate { span, .. }
            | FrontError::InvalidArgument { span, .. }
            | FrontError::UnexpectedStatement { span, .. }
            | FrontError::Expected { span, .. } => Some(*span),
            FrontError::EmptyInput => None,
        }
    }
}

/// Severity of a non-fatal [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

/// A non-fatal condition surfaced alongside a successful parse or resolve.
///
/// Distinct from [`FrontError`]: producing one never aborts the stage that
/// found it. Examples: an unresolved `type`/`uses` reference, a duplicate
/// `length` under `type string`, a block comment that reached EOF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn warning(code: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            span,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}[{}] {}: {}", self.code, self.span, self.message)
    }
}
