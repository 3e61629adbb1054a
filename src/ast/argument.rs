//! Typed argument primitives for statement arguments that aren't a plain
//! string, boolean, identifier, date, or version (RFC 7950 §6.2, §9.4.4,
//! §9.11.5, §7.8.3, and the `path`/`unique`/`key` argument grammars).

use crate::ast::identifier::Identifier;
use crate::base::Span;
use crate::error::FrontError;

/// One endpoint of a `length` or `range` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    Min,
    Max,
    Value(i64),
}

/// A single `length`/`range` alternative: either one bound, or a `..`
/// interval between two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePart {
    Single(Bound),
    Interval(Bound, Bound),
}

/// A full `length`/`range` argument: `|`-separated alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRange {
    pub parts: Vec<RangePart>,
}

fn parse_bound(text: &str, span: Span, keyword: &str) -> Result<Bound, FrontError> {
    match text {
        "min" => Ok(Bound::Min),
        "max" => Ok(Bound::Max),
        _ => text.parse::<i64>().map(Bound::Value).map_err(|_| FrontError::InvalidArgument {
            span,
            keyword: keyword.to_string(),
            text: text.to_string(),
            reason: "expected `min`, `max`, or an integer".to_string(),
        }),
    }
}

/// Parse a `length` or `range` argument (the grammar is identical; only
/// the caller's context — numeric type vs string — differs).
pub fn parse_numeric_range(
    text: &str,
    span: Span,
    keyword: &str,
) -> Result<NumericRange, FrontError> {
    let mut parts = Vec::new();
    for alt in text.split('|') {
        let alt = alt.trim();
        if alt.is_empty() {
            return Err(FrontError::InvalidArgument {
                span,
                keyword: keyword.to_string(),
                text: text.to_string(),
                reason: "empty alternative between `|`".to_string(),
            });
        }
        match alt.split_once("..") {
            Some((lo, hi)) => {
                let lo = parse_bound(lo.trim(), span, keyword)?;
                let hi = parse_bound(hi.trim(), span, keyword)?;
                parts.push(RangePart::Interval(lo, hi));
            }
            None => parts.push(RangePart::Single(parse_bound(alt, span, keyword)?)),
        }
    }
    Ok(NumericRange { parts })
}

/// `max-elements` argument: `unbounded` or a positive 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxValue {
    Unbounded,
    Value(u64),
}

pub fn parse_max_value(text: &str, span: Span) -> Result<MaxValue, FrontError> {
    if text == "unbounded" {
        return Ok(MaxValue::Unbounded);
    }
    let value: u64 = text.parse().map_err(|_| FrontError::InvalidArgument {
        span,
        keyword: "max-elements".to_string(),
        text: text.to_string(),
        reason: "expected `unbounded` or a positive integer".to_string(),
    })?;
    if value == 0 {
        return Err(FrontError::InvalidArgument {
            span,
            keyword: "max-elements".to_string(),
            text: text.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(MaxValue::Value(value))
}

/// `ordered-by` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedBy {
    User,
    System,
}

pub fn parse_ordered_by(text: &str, span: Span) -> Result<OrderedBy, FrontError> {
    match text {
        "user" => Ok(OrderedBy::User),
        "system" => Ok(OrderedBy::System),
        _ => Err(FrontError::InvalidArgument {
            span,
            keyword: "ordered-by".to_string(),
            text: text.to_string(),
            reason: "expected `user` or `system`".to_string(),
        }),
    }
}

/// `status` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Current,
    Deprecated,
    Obsolete,
}

pub fn parse_status(text: &str, span: Span) -> Result<Status, FrontError> {
    match text {
        "current" => Ok(Status::Current),
        "deprecated" => Ok(Status::Deprecated),
        "obsolete" => Ok(Status::Obsolete),
        _ => Err(FrontError::InvalidArgument {
            span,
            keyword: "status".to_string(),
            text: text.to_string(),
            reason: "expected `current`, `deprecated`, or `obsolete`".to_string(),
        }),
    }
}

/// `modifier` argument: the only legal value is `invert-match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertMatch;

pub fn parse_modifier(text: &str, span: Span) -> Result<InvertMatch, FrontError> {
    if text == "invert-match" {
        Ok(InvertMatch)
    } else {
        Err(FrontError::InvalidArgument {
            span,
            keyword: "modifier".to_string(),
            text: text.to_string(),
            reason: "expected `invert-match`".to_string(),
        })
    }
}

/// `key` argument: a whitespace-separated list of identifiers. Tabs,
/// spaces, newlines, and carriage returns all serve as separators
/// (Scenario B).
pub fn parse_key(text: &str, span: Span) -> Result<Vec<Identifier>, FrontError> {
    text.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .filter(|s| !s.is_empty())
        .map(|s| Identifier::new(s, span))
        .collect()
}

/// `unique` argument: a whitespace-separated list of slash-containing
/// descendant paths, each a sequence of identifiers.
pub fn parse_unique(text: &str, span: Span) -> Result<Vec<Vec<Identifier>>, FrontError> {
    text.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .filter(|s| !s.is_empty())
        .map(|path| {
            path.split('/')
                .filter(|seg| !seg.is_empty())
                .map(|seg| Identifier::new(seg, span))
                .collect()
        })
        .collect()
}

/// `boolean` argument: exact match `true` or `false`.
pub fn parse_boolean(text: &str, span: Span) -> Result<bool, FrontError> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FrontError::InvalidArgument {
            span,
            keyword: "boolean".to_string(),
            text: text.to_string(),
            reason: "expected `true` or `false`".to_string(),
        }),
    }
}

/// A `path` argument (for `leafref`/`augment`/`deviation`): either
/// absolute (`/a/b/c`) or relative (`../../a`), each segment an
/// identifier possibly prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPath {
    Absolute(Vec<Identifier>),
    Relative { up_levels: usize, segments: Vec<Identifier> },
}

pub fn parse_path(text: &str, span: Span) -> Result<SchemaPath, FrontError> {
    if let Some(rest) = text.strip_prefix('/') {
        let segments = rest
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|seg| first_step(seg, span))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(SchemaPath::Absolute(segments));
    }

    let mut up_levels = 0usize;
    let mut rest = text;
    loop {
        if let Some(stripped) = rest.strip_prefix("../") {
            up_levels += 1;
            rest = stripped;
        } else if rest == ".." {
            up_levels += 1;
            rest = "";
            break;
        } else {
            break;
        }
    }
    if up_levels == 0 {
        return Err(FrontError::InvalidArgument {
            span,
            keyword: "path".to_string(),
            text: text.to_string(),
            reason: "expected an absolute `/a/b` or relative `../a` path".to_string(),
        });
    }
    let segments = rest
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|seg| first_step(seg, span))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SchemaPath::Relative { up_levels, segments })
}

impl SchemaPath {
    /// The path's segments, absolute or relative, in order.
    pub fn segments(&self) -> &[Identifier] {
        match self {
            SchemaPath::Absolute(segments) => segments,
            SchemaPath::Relative { segments, .. } => segments,
        }
    }
}

fn first_step(segment: &str, span: Span) -> Result<Identifier, FrontError> {
    let name = segment.split('[').next().unwrap_or(segment);
    Identifier::new(name, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Position;

    fn span() -> Span {
        Span::at(Position::new(0, 0))
    }

    #[test]
    fn scenario_b_key_spans_multiple_lines() {
        let text = "source-port destination-port\n       source-address destination-address";
        let keys = parse_key(text, span()).unwrap();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[0].to_string(), "source-port");
        assert_eq!(keys[3].to_string(), "destination-address");
    }

    #[test]
    fn numeric_range_single_and_interval() {
        let r = parse_numeric_range("0..10|20|min..max", span(), "range").unwrap();
        assert_eq!(
            r.parts,
            vec![
                RangePart::Interval(Bound::Value(0), Bound::Value(10)),
                RangePart::Single(Bound::Value(20)),
                RangePart::Interval(Bound::Min, Bound::Max),
            ]
        );
    }

    #[test]
    fn numeric_range_rejects_empty_alternative() {
        assert!(parse_numeric_range("1||2", span(), "length").is_err());
    }

    #[test]
    fn max_value_unbounded_or_positive() {
        assert_eq!(parse_max_value("unbounded", span()).unwrap(), MaxValue::Unbounded);
        assert_eq!(parse_max_value("5", span()).unwrap(), MaxValue::Value(5));
        assert!(parse_max_value("0", span()).is_err());
    }

    #[test]
    fn ordered_by_and_status_and_modifier() {
        assert_eq!(parse_ordered_by("user", span()).unwrap(), OrderedBy::User);
        assert!(parse_ordered_by("maybe", span()).is_err());
        assert_eq!(parse_status("obsolete", span()).unwrap(), Status::Obsolete);
        assert!(parse_modifier("invert-match", span()).is_ok());
        assert!(parse_modifier("invert", span()).is_err());
    }

    #[test]
    fn unique_splits_paths_then_segments() {
        let u = parse_unique("a/b/c d/e", span()).unwrap();
        assert_eq!(u.len(), 2);
        assert_eq!(u[0].len(), 3);
        assert_eq!(u[1].len(), 2);
    }

    #[test]
    fn absolute_and_relative_paths() {
        match parse_path("/a/b/c", span()).unwrap() {
            SchemaPath::Absolute(segs) => assert_eq!(segs.len(), 3),
            _ => panic!("expected absolute path"),
        }
        match parse_path("../../a", span()).unwrap() {
            SchemaPath::Relative { up_levels, segments } => {
                assert_eq!(up_levels, 2);
                assert_eq!(segments.len(), 1);
            }
            _ => panic!("expected relative path"),
        }
    }

    #[test]
    fn path_with_predicate_keeps_only_the_node_name() {
        match parse_path("/a/b[key='x']/c", span()).unwrap() {
            SchemaPath::Absolute(segs) => {
                assert_eq!(segs[1].to_string(), "b");
            }
            _ => panic!("expected absolute path"),
        }
    }
}
