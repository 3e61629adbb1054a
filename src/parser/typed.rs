//! Stage two of parsing: the untyped [`RawStmt`] tree becomes the typed
//! [`Statement`] tree, by keyword dispatch.
//!
//! Statements with an unrecognized or prefixed keyword become
//! [`Statement::Unknown`] rather than failing the parse — vendor
//! extensions are legal everywhere a sub-statement is legal (RFC 7950
//! §6.2.1), and this crate does not know every extension in the wild.

use crate::ast::*;
use crate::base::Span;
use crate::error::{Diagnostic, FrontError};
use crate::parser::raw::{RawArgument, RawStmt};

/// Sub-statements the RFC limits to at most one occurrence. A second
/// occurrence is not a parse failure (§9 prefers lenient parsing); it is
/// surfaced as a `duplicate-<keyword>` warning instead.
const SINGLETON_CHILD_KEYWORDS: &[&str] = &[
    "description",
    "reference",
    "type",
    "units",
    "default",
    "config",
    "mandatory",
    "when",
    "presence",
    "ordered-by",
    "key",
    "min-elements",
    "max-elements",
    "path",
    "fraction-digits",
    "require-instance",
    "yin-element",
    "value",
    "position",
    "namespace",
    "prefix",
    "belongs-to",
    "contact",
    "organization",
    "yang-version",
    "length",
    "range",
    "status",
    "modifier",
];

/// `type`'s restriction sub-statements (`range`, `enum`, `bit`, ...), per
/// §9. Checked only against the statement's own body; a `type` can itself
/// have a nested `type` (inside `union`), so this is not recursive.
const TYPE_RESTRICTION_KEYWORDS: &[&str] = &[
    "range",
    "length",
    "pattern",
    "enum",
    "bit",
    "path",
    "require-instance",
    "base",
    "type",
    "fraction-digits",
];

/// The restriction sub-statements legal under a built-in base type name.
/// Returns `None` for anything that isn't a recognized built-in — a `type`
/// naming a `typedef` can't be classified without cross-module resolution
/// (out of scope, §1 Non-goals), so its restrictions go unchecked.
fn allowed_type_restrictions(base: &str) -> Option<&'static [&'static str]> {
    Some(match base {
        "string" => &["length", "pattern"],
        "decimal64" => &["fraction-digits", "range"],
        "int8" | "int16" | "int32" | "int64" | "uint8" | "uint16" | "uint32" | "uint64" => {
            &["range"]
        }
        "enumeration" => &["enum"],
        "bits" => &["bit"],
        "leafref" => &["path", "require-instance"],
        "identityref" => &["base"],
        "instance-identifier" => &["require-instance"],
        "union" => &["type"],
        "binary" => &["length"],
        "boolean" | "empty" => &[],
        _ => return None,
    })
}

/// Reject a restriction sub-statement that doesn't belong under `name`'s
/// base type (e.g. `bit`/`position` under `type uint8`, a second `range`
/// flavor of restriction under `type enumeration`).
fn check_type_restrictions(name: &Identifier, body: &[Statement]) -> Result<(), FrontError> {
    let Identifier::Plain(plain) = name else {
        return Ok(());
    };
    let Some(allowed) = allowed_type_restrictions(plain.as_str()) else {
        return Ok(());
    };
    for child in body {
        let kw = child.keyword();
        if TYPE_RESTRICTION_KEYWORDS.contains(&kw) && !allowed.contains(&kw) {
            return Err(FrontError::UnexpectedStatement { span: child.span(), keyword: kw.to_string() });
        }
    }
    Ok(())
}

fn require_argument<'a>(
    argument: &'a Option<RawArgument>,
    span: Span,
    keyword: &str,
) -> Result<&'a RawArgument, FrontError> {
    argument.as_ref().ok_or_else(|| FrontError::Expected {
        span,
        expected: format!("an argument for `{keyword}`"),
        found: "no argument".to_string(),
    })
}

/// Recursively convert a statement's children, then flag duplicate
/// singleton sub-statements among the results.
fn convert_body(
    body: Option<Vec<RawStmt>>,
    diags: &mut Vec<Diagnostic>,
) -> Result<Vec<Statement>, FrontError> {
    let Some(children) = body else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        out.push(convert_statement(child, diags)?);
    }
    check_duplicate_singletons(&out, diags);
    Ok(out)
}

fn check_duplicate_singletons(children: &[Statement], diags: &mut Vec<Diagnostic>) {
    let mut seen = std::collections::HashSet::new();
    for child in children {
        let kw = child.keyword();
        if SINGLETON_CHILD_KEYWORDS.contains(&kw) && !seen.insert(kw) {
            diags.push(Diagnostic::warning(
                format!("duplicate-{kw}"),
                format!("`{kw}` appears more than once; only the first occurrence is meaningful"),
                child.span(),
            ));
        }
    }
}

fn string_arg(
    argument: &Option<RawArgument>,
    span: Span,
    keyword: &str,
) -> Result<StringArg, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Ok(StringArg { value: arg.text.clone(), span: arg.span })
}

fn ident_arg(
    argument: &Option<RawArgument>,
    span: Span,
    keyword: &str,
) -> Result<IdentArg, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Ok(IdentArg { value: Identifier::new(&arg.text, arg.span)?, span: arg.span })
}

fn bool_arg(
    argument: &Option<RawArgument>,
    span: Span,
    keyword: &str,
) -> Result<BoolArg, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Ok(BoolArg { value: parse_boolean(&arg.text, arg.span)?, span: arg.span })
}

fn date_arg(
    argument: &Option<RawArgument>,
    span: Span,
    keyword: &str,
) -> Result<DateArg, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Ok(DateArg { value: Date::parse(&arg.text, arg.span)?, span: arg.span })
}

fn name(argument: &Option<RawArgument>, span: Span, keyword: &str) -> Result<Identifier, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Identifier::new(&arg.text, arg.span)
}

/// Parse the statement and convert its body into a [`NamedBodyStmt`],
/// the shape shared by most named, open-bodied statements.
fn named_body(
    argument: &Option<RawArgument>,
    body: Option<Vec<RawStmt>>,
    span: Span,
    keyword: &str,
    diags: &mut Vec<Diagnostic>,
) -> Result<NamedBodyStmt, FrontError> {
    let name = name(argument, span, keyword)?;
    Ok(NamedBodyStmt { name, body: convert_body(body, diags)?, span })
}

fn bare_body(
    body: Option<Vec<RawStmt>>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> Result<BareBodyStmt, FrontError> {
    Ok(BareBodyStmt { body: convert_body(body, diags)?, span })
}

fn path_body(
    argument: &Option<RawArgument>,
    body: Option<Vec<RawStmt>>,
    span: Span,
    keyword: &str,
    diags: &mut Vec<Diagnostic>,
) -> Result<PathBodyStmt, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    let path = parse_path(&arg.text, arg.span)?;
    Ok(PathBodyStmt { path, body: convert_body(body, diags)?, span })
}

fn range_body(
    argument: &Option<RawArgument>,
    body: Option<Vec<RawStmt>>,
    span: Span,
    keyword: &str,
    diags: &mut Vec<Diagnostic>,
) -> Result<RangeBodyStmt, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    let value = parse_numeric_range(&arg.text, arg.span, keyword)?;
    Ok(RangeBodyStmt { value, body: convert_body(body, diags)?, span })
}

fn string_body(
    argument: &Option<RawArgument>,
    body: Option<Vec<RawStmt>>,
    span: Span,
    keyword: &str,
    diags: &mut Vec<Diagnostic>,
) -> Result<StringBodyStmt, FrontError> {
    let arg = require_argument(argument, span, keyword)?;
    Ok(StringBodyStmt { value: arg.text.clone(), body: convert_body(body, diags)?, span })
}

fn convert_unknown(
    keyword: Identifier,
    argument: Option<RawArgument>,
    body: Option<Vec<RawStmt>>,
    span: Span,
    diags: &mut Vec<Diagnostic>,
) -> Result<UnknownStmt, FrontError> {
    Ok(UnknownStmt {
        keyword,
        argument: argument.map(|a| a.text),
        body: convert_body(body, diags)?,
        span,
    })
}

/// Convert a single untyped statement into its typed form.
pub fn convert_statement(raw: RawStmt, diags: &mut Vec<Diagnostic>) -> Result<Statement, FrontError> {
    let RawStmt { keyword, argument, body, span } = raw;

    let local = match &keyword {
        Identifier::Plain(p) => p.as_str().to_string(),
        Identifier::Prefixed(_) => {
            return Ok(Statement::Unknown(convert_unknown(keyword, argument, body, span, diags)?))
        }
    };

    Ok(match local.as_str() {
        "module" => Statement::Module(ModuleHeaderStmt {
            name: name(&argument, span, "module")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "submodule" => Statement::Submodule(SubmoduleHeaderStmt {
            name: name(&argument, span, "submodule")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "yang-version" => {
            let arg = require_argument(&argument, span, "yang-version")?;
            Statement::YangVersion(VersionArg { value: Version::parse(&arg.text, arg.span)?, span: arg.span })
        }
        "namespace" => Statement::Namespace(string_arg(&argument, span, "namespace")?),
        "prefix" => Statement::Prefix(ident_arg(&argument, span, "prefix")?),
        "belongs-to" => Statement::BelongsTo(BelongsToStmt {
            module: name(&argument, span, "belongs-to")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "import" => Statement::Import(ImportStmt {
            module: name(&argument, span, "import")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "include" => Statement::Include(IncludeStmt {
            module: name(&argument, span, "include")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "revision-date" => Statement::RevisionDate(date_arg(&argument, span, "revision-date")?),
        "organization" => Statement::Organization(string_arg(&argument, span, "organization")?),
        "contact" => Statement::Contact(string_arg(&argument, span, "contact")?),
        "description" => Statement::Description(string_arg(&argument, span, "description")?),
        "reference" => Statement::Reference(string_arg(&argument, span, "reference")?),
        "revision" => {
            let arg = require_argument(&argument, span, "revision")?;
            Statement::Revision(RevisionStmt {
                date: Date::parse(&arg.text, arg.span)?,
                body: convert_body(body, diags)?,
                span,
            })
        }

        "typedef" => Statement::Typedef(named_body(&argument, body, span, "typedef", diags)?),
        "type" => {
            let type_name = name(&argument, span, "type")?;
            let converted_body = convert_body(body, diags)?;
            check_type_restrictions(&type_name, &converted_body)?;
            Statement::Type(TypeStmt { name: type_name, body: converted_body, span })
        }
        "grouping" => Statement::Grouping(named_body(&argument, body, span, "grouping", diags)?),
        "uses" => Statement::Uses(UsesStmt {
            grouping: name(&argument, span, "uses")?,
            body: convert_body(body, diags)?,
            span,
        }),

        "container" => Statement::Container(named_body(&argument, body, span, "container", diags)?),
        "leaf" => Statement::Leaf(named_body(&argument, body, span, "leaf", diags)?),
        "leaf-list" => Statement::LeafList(named_body(&argument, body, span, "leaf-list", diags)?),
        "list" => Statement::List(named_body(&argument, body, span, "list", diags)?),
        "choice" => Statement::Choice(named_body(&argument, body, span, "choice", diags)?),
        "case" => Statement::Case(named_body(&argument, body, span, "case", diags)?),
        "anydata" => Statement::Anydata(named_body(&argument, body, span, "anydata", diags)?),
        "anyxml" => Statement::Anyxml(named_body(&argument, body, span, "anyxml", diags)?),

        "rpc" => Statement::Rpc(named_body(&argument, body, span, "rpc", diags)?),
        "action" => Statement::Action(named_body(&argument, body, span, "action", diags)?),
        "notification" => Statement::Notification(named_body(&argument, body, span, "notification", diags)?),
        "input" => Statement::Input(bare_body(body, span, diags)?),
        "output" => Statement::Output(bare_body(body, span, diags)?),

        "augment" => Statement::Augment(path_body(&argument, body, span, "augment", diags)?),
        "deviation" => Statement::Deviation(path_body(&argument, body, span, "deviation", diags)?),
        "refine" => Statement::Refine(path_body(&argument, body, span, "refine", diags)?),
        "deviate" => {
            let arg = require_argument(&argument, span, "deviate")?;
            let kind = match arg.text.as_str() {
                "add" => DeviateKind::Add,
                "replace" => DeviateKind::Replace,
                "delete" => DeviateKind::Delete,
                "not-supported" => DeviateKind::NotSupported,
                other => {
                    return Err(FrontError::InvalidArgument {
                        span: arg.span,
                        keyword: "deviate".to_string(),
                        text: other.to_string(),
                        reason: "expected `add`, `replace`, `delete`, or `not-supported`".to_string(),
                    })
                }
            };
            Statement::Deviate(DeviateStmt { kind, body: convert_body(body, diags)?, span })
        }

        "feature" => Statement::Feature(named_body(&argument, body, span, "feature", diags)?),
        "identity" => Statement::Identity(named_body(&argument, body, span, "identity", diags)?),
        "extension" => Statement::Extension(named_body(&argument, body, span, "extension", diags)?),
        "argument" => Statement::Argument(ArgumentStmt {
            name: name(&argument, span, "argument")?,
            body: convert_body(body, diags)?,
            span,
        }),
        "yin-element" => Statement::YinElement(bool_arg(&argument, span, "yin-element")?),

        "must" => Statement::Must(string_body(&argument, body, span, "must", diags)?),
        "when" => Statement::When(string_body(&argument, body, span, "when", diags)?),
        "if-feature" => Statement::IfFeature(string_arg(&argument, span, "if-feature")?),

        "key" => {
            let arg = require_argument(&argument, span, "key")?;
            Statement::Key(KeyStmt { identifiers: parse_key(&arg.text, arg.span)?, span: arg.span })
        }
        "unique" => {
            let arg = require_argument(&argument, span, "unique")?;
            Statement::Unique(UniqueStmt { paths: parse_unique(&arg.text, arg.span)?, span: arg.span })
        }
        "config" => Statement::Config(bool_arg(&argument, span, "config")?),
        "mandatory" => Statement::Mandatory(bool_arg(&argument, span, "mandatory")?),
        "presence" => Statement::Presence(string_arg(&argument, span, "presence")?),
        "default" => Statement::Default(string_arg(&argument, span, "default")?),
        "min-elements" => {
            let arg = require_argument(&argument, span, "min-elements")?;
            let value: u64 = arg.text.parse().map_err(|_| FrontError::InvalidArgument {
                span: arg.span,
                keyword: "min-elements".to_string(),
                text: arg.text.clone(),
                reason: "expected a non-negative integer".to_string(),
            })?;
            Statement::MinElements(MinElementsArg { value, span: arg.span })
        }
        "max-elements" => {
            let arg = require_argument(&argument, span, "max-elements")?;
            Statement::MaxElements(MaxElementsArg { value: parse_max_value(&arg.text, arg.span)?, span: arg.span })
        }
        "ordered-by" => {
            let arg = require_argument(&argument, span, "ordered-by")?;
            Statement::OrderedByStmt(OrderedByArg { value: parse_ordered_by(&arg.text, arg.span)?, span: arg.span })
        }
        "status" => {
            let arg = require_argument(&argument, span, "status")?;
            Statement::StatusStmt(StatusArg { value: parse_status(&arg.text, arg.span)?, span: arg.span })
        }
        "units" => Statement::Units(string_arg(&argument, span, "units")?),
        "base" => Statement::Base(ident_arg(&argument, span, "base")?),

        "length" => Statement::Length(range_body(&argument, body, span, "length", diags)?),
        "range" => Statement::Range(range_body(&argument, body, span, "range", diags)?),
        "modifier" => {
            let arg = require_argument(&argument, span, "modifier")?;
            Statement::Modifier(ModifierArg { value: parse_modifier(&arg.text, arg.span)?, span: arg.span })
        }
        "pattern" => {
            let arg = require_argument(&argument, span, "pattern")?;
            let converted = convert_body(body, diags)?;
            let modifier = converted.iter().find_map(|s| match s {
                Statement::Modifier(m) => Some(m.value),
                _ => None,
            });
            Statement::Pattern(PatternStmt { value: arg.text.clone(), modifier, body: converted, span })
        }
        "enum" => Statement::Enum(named_body(&argument, body, span, "enum", diags)?),
        "value" => {
            let arg = require_argument(&argument, span, "value")?;
            let value: i64 = arg.text.parse().map_err(|_| FrontError::InvalidArgument {
                span: arg.span,
                keyword: "value".to_string(),
                text: arg.text.clone(),
                reason: "expected an integer".to_string(),
            })?;
            Statement::Value(IntArg { value, span: arg.span })
        }
        "bit" => Statement::Bit(named_body(&argument, body, span, "bit", diags)?),
        "position" => {
            let arg = require_argument(&argument, span, "position")?;
            let value: i64 = arg.text.parse().map_err(|_| FrontError::InvalidArgument {
                span: arg.span,
                keyword: "position".to_string(),
                text: arg.text.clone(),
                reason: "expected a non-negative integer".to_string(),
            })?;
            Statement::Position(IntArg { value, span: arg.span })
        }
        "path" => {
            let arg = require_argument(&argument, span, "path")?;
            Statement::PathStmt(PathArg { value: parse_path(&arg.text, arg.span)?, span: arg.span })
        }
        "require-instance" => Statement::RequireInstance(bool_arg(&argument, span, "require-instance")?),
        "fraction-digits" => {
            let arg = require_argument(&argument, span, "fraction-digits")?;
            let value: i64 = arg.text.parse().map_err(|_| FrontError::InvalidArgument {
                span: arg.span,
                keyword: "fraction-digits".to_string(),
                text: arg.text.clone(),
                reason: "expected an integer between 1 and 18".to_string(),
            })?;
            Statement::FractionDigits(IntArg { value, span: arg.span })
        }
        "error-message" => Statement::ErrorMessage(string_arg(&argument, span, "error-message")?),
        "error-app-tag" => Statement::ErrorAppTag(string_arg(&argument, span, "error-app-tag")?),

        _ => Statement::Unknown(convert_unknown(keyword, argument, body, span, diags)?),
    })
}
