//! YANG identifiers (RFC 7950 §6.2): plain names, `prefix:name` references,
//! and the reference sum type that covers both.

use crate::base::Span;
use crate::error::FrontError;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_id_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// A plain YANG identifier: `ALPHA | "_"` followed by `ALPHA | DIGIT | "_" |
/// "-" | "."`.
#[derive(Debug, Clone, Eq)]
pub struct PlainIdentifier(Rc<str>);

impl PlainIdentifier {
    /// Checked constructor: rejects malformed input with [`FrontError::InvalidIdentifier`].
    pub fn new(text: &str, span: Span) -> Result<Self, FrontError> {
        if !is_valid_plain(text) {
            return Err(FrontError::InvalidIdentifier {
                span,
                text: text.to_string(),
                reason: "not a valid YANG identifier".to_string(),
            });
        }
        Ok(Self(Rc::from(text)))
    }

    /// Unchecked constructor for caller-guaranteed-valid input.
    pub fn new_unchecked(text: &str) -> Self {
        Self(Rc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether `text` is a valid plain identifier, without constructing one.
pub fn is_valid_plain(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_id_start(c) => {}
        _ => return false,
    }
    chars.all(is_id_continue)
}

impl PartialEq for PlainIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl std::hash::Hash for PlainIdentifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialOrd for PlainIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlainIdentifier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for PlainIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `prefix:name` reference, both halves plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixedIdentifier {
    pub prefix: PlainIdentifier,
    pub name: PlainIdentifier,
}

impl fmt::Display for PrefixedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

/// Sum of [`PlainIdentifier`] and [`PrefixedIdentifier`] — what most
/// statement arguments and `type`/`uses` references actually are.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Plain(PlainIdentifier),
    Prefixed(PrefixedIdentifier),
}

impl Identifier {
    /// Checked constructor. Splits on the first `:`; both halves (or the
    /// whole string, if unprefixed) must be valid plain identifiers.
    pub fn new(text: &str, span: Span) -> Result<Self, FrontError> {
        match text.split_once(':') {
            Some((prefix, name)) => {
                let prefix = PlainIdentifier::new(prefix, span)?;
                let name = PlainIdentifier::new(name, span)?;
                Ok(Identifier::Prefixed(PrefixedIdentifier { prefix, name }))
            }
            None => Ok(Identifier::Plain(PlainIdentifier::new(text, span)?)),
        }
    }

    pub fn new_unchecked(text: &str) -> Self {
        match text.split_once(':') {
            Some((prefix, name)) => Identifier::Prefixed(PrefixedIdentifier {
                prefix: PlainIdentifier::new_unchecked(prefix),
                name: PlainIdentifier::new_unchecked(name),
            }),
            None => Identifier::Plain(PlainIdentifier::new_unchecked(text)),
        }
    }

    /// The local name: for a plain identifier, itself; for a prefixed one,
    /// the part after the `:`. This is what the resolver keys definitions
    /// and uses by (per-module resolution ignores import prefixes, §1
    /// Non-goals).
    pub fn local_name(&self) -> &str {
        match self {
            Identifier::Plain(p) => p.as_str(),
            Identifier::Prefixed(p) => p.name.as_str(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Plain(p) => write!(f, "{p}"),
            Identifier::Prefixed(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s, Span::at(crate::base::Position::new(0, 0)))
            .map_err(|e| e.to_string())
    }
}

/// Check identifier validity without constructing a value (spec §8
/// invariant 6: `is_valid(id) ⇔ checked_make(id)` succeeds).
pub fn is_valid(text: &str) -> bool {
    match text.split_once(':') {
        Some((prefix, name)) => is_valid_plain(prefix) && is_valid_plain(name),
        None => is_valid_plain(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;

    fn span() -> Span {
        Span::at(Position::new(0, 0))
    }

    #[test]
    fn plain_identifier_accepts_underscores_and_dashes() {
        assert!(is_valid_plain("host-name"));
        assert!(is_valid_plain("_leading"));
        assert!(is_valid_plain("a.b.c"));
        assert!(!is_valid_plain("1abc"));
        assert!(!is_valid_plain(""));
        assert!(!is_valid_plain("has space"));
    }

    #[test]
    fn prefixed_identifier_splits_on_colon() {
        let id = Identifier::new("sys:percentage", span()).unwrap();
        match id {
            Identifier::Prefixed(p) => {
                assert_eq!(p.prefix.as_str(), "sys");
                assert_eq!(p.name.as_str(), "percentage");
            }
            _ => panic!("expected prefixed identifier"),
        }
    }

    #[test]
    fn invalid_identifier_is_rejected() {
        assert!(Identifier::new("9bad", span()).is_err());
        assert!(Identifier::new("sys:9bad", span()).is_err());
    }

    #[test]
    fn equality_is_structural_and_case_sensitive() {
        let a = Identifier::new("Foo", span()).unwrap();
        let b = Identifier::new("Foo", span()).unwrap();
        let c = Identifier::new("foo", span()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn is_valid_matches_checked_make() {
        for text in ["foo", "foo:bar", "9bad", "", "a-b.c_d"] {
            assert_eq!(is_valid(text), Identifier::new(text, span()).is_ok());
        }
    }

    #[test]
    fn local_name_ignores_prefix() {
        let id = Identifier::new("sys:percentage", span()).unwrap();
        assert_eq!(id.local_name(), "percentage");
        let plain = Identifier::new("percentage", span()).unwrap();
        assert_eq!(plain.local_name(), "percentage");
    }
}
