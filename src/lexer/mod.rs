//! Lexical front end: comment stripping, tokenization, and string-literal
//! decoding. Everything above the byte level (identifiers, dates,
//! versions, length/range expressions, ...) lives in [`crate::ast`]'s
//! argument primitives, since those need the typed AST's error variants.

pub mod comments;
pub mod primitives;
pub mod token;

pub use comments::{strip_comments, StripOutcome};
pub use token::{tokenize, Kind, Token};
