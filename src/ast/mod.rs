//! The typed YANG abstract syntax tree: argument primitives (identifiers,
//! dates, versions, and the smaller per-keyword argument grammars) and the
//! statement sum type built from them.

pub mod argument;
pub mod date;
pub mod identifier;
pub mod statement;
pub mod version;

pub use argument::{
    parse_boolean, parse_key, parse_max_value, parse_modifier, parse_numeric_range,
    parse_ordered_by, parse_path, parse_status, parse_unique, Bound, InvertMatch, MaxValue,
    NumericRange, OrderedBy, RangePart, SchemaPath, Status,
};
pub use date::Date;
pub use identifier::{is_valid, Identifier, PlainIdentifier, PrefixedIdentifier};
pub use statement::*;
pub use version::Version;
