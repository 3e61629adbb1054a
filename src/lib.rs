//! A YANG (RFC 7950) front end: comment stripping, a combinator-style
//! statement parser producing a typed abstract syntax tree, and a
//! definition/use resolver over that tree.
//!
//! The pipeline has three stages, each exposed at the crate root:
//!
//! 1. [`strip_comments`] removes `//` and `/* */` comments while leaving
//!    comment-like bytes inside quoted strings untouched.
//! 2. [`parse_module`] / [`parse_submodule`] / [`parse_statement`] turn
//!    comment-stripped source text into a typed [`ast::Statement`] tree.
//! 3. [`collect_definitions`], [`resolve`], and [`resolve_module`] walk
//!    that tree, assigning identities to `typedef`/`grouping`
//!    definitions and linking `type`/`uses` references to them.
//!
//! This crate does not read files, does not resolve `import`/`include`
//! across modules, and does not evaluate XPath (`must`/`when`/`path`
//! arguments are captured as typed data, not executed). A thin CLI
//! driver that does its own file I/O lives in `src/bin/yang_front.rs`.

pub mod ast;
pub mod base;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use error::{Diagnostic, FrontError, Severity};
pub use lexer::strip_comments;
pub use parser::{parse_module, parse_statement, parse_submodule, ParseOutcome, ParsedModule};
pub use resolver::{collect_definitions, resolve, resolve_module, Node, NodeKind};
