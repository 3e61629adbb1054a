//! The YANG statement AST (RFC 7950's full statement grammar).
//!
//! Every statement is conceptually the triple `(keyword, optional
//! argument, optional body)` that §3 describes. Concretely, each RFC 7950
//! keyword gets its own variant of [`Statement`] whose payload struct
//! carries the semantically appropriate argument type and, where the
//! statement can have a body, an ordered `Vec<Statement>` of children.
//! Cardinality is *not* enforced here — a body may hold duplicates of a
//! sub-statement the RFC limits to one; the parser is deliberately
//! lenient (§9 "Relaxed cardinality") and callers that care inspect the
//! typed AST themselves or consult the diagnostics the parser emitted.
//!
//! Unknown `prefix:keyword` statements (vendor extensions) are preserved
//! verbatim as [`Unknown`] and may appear in any body.

use crate::ast::argument::{InvertMatch, MaxValue, NumericRange, OrderedBy, SchemaPath, Status};
use crate::ast::date::Date;
use crate::ast::identifier::Identifier;
use crate::ast::version::Version;
use crate::base::Span;

/// Every parsed statement, typed or unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Module(ModuleHeaderStmt),
    Submodule(SubmoduleHeaderStmt),
    YangVersion(VersionArg),
    Namespace(StringArg),
    Prefix(IdentArg),
    BelongsTo(BelongsToStmt),
    Import(ImportStmt),
    Include(IncludeStmt),
    RevisionDate(DateArg),
    Organization(StringArg),
    Contact(StringArg),
    Description(StringArg),
    Reference(StringArg),
    Revision(RevisionStmt),

    Typedef(NamedBodyStmt),
    Type(TypeStmt),
    Grouping(NamedBodyStmt),
    Uses(UsesStmt),

    Container(NamedBodyStmt),
    Leaf(NamedBodyStmt),
    LeafList(NamedBodyStmt),
    List(NamedBodyStmt),
    Choice(NamedBodyStmt),
    Case(NamedBodyStmt),
    Anydata(NamedBodyStmt),
    Anyxml(NamedBodyStmt),

    Rpc(NamedBodyStmt),
    Action(NamedBodyStmt),
    Notification(NamedBodyStmt),
    Input(BareBodyStmt),
    Output(BareBodyStmt),

    Augment(PathBodyStmt),
    Deviation(PathBodyStmt),
    Deviate(DeviateStmt),
    Refine(PathBodyStmt),

    Feature(NamedBodyStmt),
    Identity(NamedBodyStmt),
    Extension(NamedBodyStmt),
    Argument(ArgumentStmt),
    YinElement(BoolArg),

    Must(StringBodyStmt),
    When(StringBodyStmt),
    IfFeature(StringArg),

    Key(KeyStmt),
    Unique(UniqueStmt),
    Config(BoolArg),
    Mandatory(BoolArg),
    Presence(StringArg),
    Default(StringArg),
    MinElements(MinElementsArg),
    MaxElements(MaxElementsArg),
    OrderedByStmt(OrderedByArg),
    StatusStmt(StatusArg),
    Units(StringArg),
    Base(IdentArg),

    Length(RangeBodyStmt),
    Range(RangeBodyStmt),
    Pattern(PatternStmt),
    Modifier(ModifierArg),
    Enum(NamedBodyStmt),
    Value(IntArg),
    Bit(NamedBodyStmt),
    Position(IntArg),
    PathStmt(PathArg),
    RequireInstance(BoolArg),
    FractionDigits(IntArg),
    ErrorMessage(StringArg),
    ErrorAppTag(StringArg),

    Unknown(UnknownStmt),
}

impl Statement {
    /// The statement's source span, regardless of which variant it is.
    pub fn span(&self) -> Span {
        match self {
            Statement::Module(s) => s.span,
            Statement::Submodule(s) => s.span,
            Statement::YangVersion(s) => s.span,
            Statement::Namespace(s) => s.span,
            Statement::Prefix(s) => s.span,
            Statement::BelongsTo(s) => s.span,
            Statement::Import(s) => s.span,
            Statement::Include(s) => s.span,
            Statement::RevisionDate(s) => s.span,
            Statement::Organization(s) => s.span,
            Statement::Contact(s) => s.span,
            Statement::Description(s) => s.span,
            Statement::Reference(s) => s.span,
            Statement::Revision(s) => s.span,
            Statement::Typedef(s) => s.span,
            Statement::Type(s) => s.span,
            Statement::Grouping(s) => s.span,
            Statement::Uses(s) => s.span,
            Statement::Container(s) => s.span,
            Statement::Leaf(s) => s.span,
            Statement::LeafList(s) => s.span,
            Statement::List(s) => s.span,
            Statement::Choice(s) => s.span,
            Statement::Case(s) => s.span,
            Statement::Anydata(s) => s.span,
            Statement::Anyxml(s) => s.span,
            Statement::Rpc(s) => s.span,
            Statement::Action(s) => s.span,
            Statement::Notification(s) => s.span,
            Statement::Input(s) => s.span,
            Statement::Output(s) => s.span,
            Statement::Augment(s) => s.span,
            Statement::Deviation(s) => s.span,
            Statement::Deviate(s) => s.span,
            Statement::Refine(s) => s.span,
            Statement::Feature(s) => s.span,
            Statement::Identity(s) => s.span,
            Statement::Extension(s) => s.span,
            Statement::Argument(s) => s.span,
            Statement::YinElement(s) => s.span,
            Statement::Must(s) => s.span,
            Statement::When(s) => s.span,
            Statement::IfFeature(s) => s.span,
            Statement::Key(s) => s.span,
            Statement::Unique(s) => s.span,
            Statement::Config(s) => s.span,
            Statement::Mandatory(s) => s.span,
            Statement::Presence(s) => s.span,
            Statement::Default(s) => s.span,
            Statement::MinElements(s) => s.span,
            Statement::MaxElements(s) => s.span,
            Statement::OrderedByStmt(s) => s.span,
            Statement::StatusStmt(s) => s.span,
            Statement::Units(s) => s.span,
            Statement::Base(s) => s.span,
            Statement::Length(s) => s.span,
            Statement::Range(s) => s.span,
            Statement::Pattern(s) => s.span,
            Statement::Modifier(s) => s.span,
            Statement::Enum(s) => s.span,
            Statement::Value(s) => s.span,
            Statement::Bit(s) => s.span,
            Statement::Position(s) => s.span,
            Statement::PathStmt(s) => s.span,
            Statement::RequireInstance(s) => s.span,
            Statement::FractionDigits(s) => s.span,
            Statement::ErrorMessage(s) => s.span,
            Statement::ErrorAppTag(s) => s.span,
            Statement::Unknown(s) => s.span,
        }
    }

    /// The statement's RFC 7950 keyword text, for diagnostics.
    pub fn keyword(&self) -> &str {
        match self {
            Statement::Module(_) => "module",
            Statement::Submodule(_) => "submodule",
            Statement::YangVersion(_) => "yang-version",
            Statement::Namespace(_) => "namespace",
            Statement::Prefix(_) => "prefix",
            Statement::BelongsTo(_) => "belongs-to",
            Statement::Import(_) => "import",
            Statement::Include(_) => "include",
            Statement::RevisionDate(_) => "revision-date",
            Statement::Organization(_) => "organization",
            Statement::Contact(_) => "contact",
            Statement::Description(_) => "description",
            Statement::Reference(_) => "reference",
            Statement::Revision(_) => "revision",
            Statement::Typedef(_) => "typedef",
            Statement::Type(_) => "type",
            Statement::Grouping(_) => "grouping",
            Statement::Uses(_) => "uses",
            Statement::Container(_) => "container",
            Statement::Leaf(_) => "leaf",
            Statement::LeafList(_) => "leaf-list",
            Statement::List(_) => "list",
            Statement::Choice(_) => "choice",
            Statement::Case(_) => "case",
            Statement::Anydata(_) => "anydata",
            Statement::Anyxml(_) => "anyxml",
            Statement::Rpc(_) => "rpc",
            Statement::Action(_) => "action",
            Statement::Notification(_) => "notification",
            Statement::Input(_) => "input",
            Statement::Output(_) => "output",
            Statement::Augment(_) => "augment",
            Statement::Deviation(_) => "deviation",
            Statement::Deviate(_) => "deviate",
            Statement::Refine(_) => "refine",
            Statement::Feature(_) => "feature",
            Statement::Identity(_) => "identity",
            Statement::Extension(_) => "extension",
            Statement::Argument(_) => "argument",
            Statement::YinElement(_) => "yin-element",
            Statement::Must(_) => "must",
            Statement::When(_) => "when",
            Statement::IfFeature(_) => "if-feature",
            Statement::Key(_) => "key",
            Statement::Unique(_) => "unique",
            Statement::Config(_) => "config",
            Statement::Mandatory(_) => "mandatory",
            Statement::Presence(_) => "presence",
            Statement::Default(_) => "default",
            Statement::MinElements(_) => "min-elements",
            Statement::MaxElements(_) => "max-elements",
            Statement::OrderedByStmt(_) => "ordered-by",
            Statement::StatusStmt(_) => "status",
            Statement::Units(_) => "units",
            Statement::Base(_) => "base",
            Statement::Length(_) => "length",
            Statement::Range(_) => "range",
            Statement::Pattern(_) => "pattern",
            Statement::Modifier(_) => "modifier",
            Statement::Enum(_) => "enum",
            Statement::Value(_) => "value",
            Statement::Bit(_) => "bit",
            Statement::Position(_) => "position",
            Statement::PathStmt(_) => "path",
            Statement::RequireInstance(_) => "require-instance",
            Statement::FractionDigits(_) => "fraction-digits",
            Statement::ErrorMessage(_) => "error-message",
            Statement::ErrorAppTag(_) => "error-app-tag",
            Statement::Unknown(s) => s.keyword.local_name(),
        }
    }

    /// The statement's body, if it has one (empty body and no body are
    /// indistinguishable here by design — the grammar relaxes
    /// cardinality, so an empty `Vec` covers both `;` and `{ }`).
    pub fn body(&self) -> &[Statement] {
        match self {
            Statement::Module(s) => &s.body,
            Statement::Submodule(s) => &s.body,
            Statement::BelongsTo(s) => &s.body,
            Statement::Import(s) => &s.body,
            Statement::Include(s) => &s.body,
            Statement::Revision(s) => &s.body,
            Statement::Typedef(s) => &s.body,
            Statement::Type(s) => &s.body,
            Statement::Grouping(s) => &s.body,
            Statement::Uses(s) => &s.body,
            Statement::Container(s) => &s.body,
            Statement::Leaf(s) => &s.body,
            Statement::LeafList(s) => &s.body,
            Statement::List(s) => &s.body,
            Statement::Choice(s) => &s.body,
            Statement::Case(s) => &s.body,
            Statement::Anydata(s) => &s.body,
            Statement::Anyxml(s) => &s.body,
            Statement::Rpc(s) => &s.body,
            Statement::Action(s) => &s.body,
            Statement::Notification(s) => &s.body,
            Statement::Input(s) => &s.body,
            Statement::Output(s) => &s.body,
            Statement::Augment(s) => &s.body,
            Statement::Deviation(s) => &s.body,
            Statement::Deviate(s) => &s.body,
            Statement::Refine(s) => &s.body,
            Statement::Feature(s) => &s.body,
            Statement::Identity(s) => &s.body,
            Statement::Extension(s) => &s.body,
            Statement::Argument(s) => &s.body,
            Statement::Must(s) => &s.body,
            Statement::When(s) => &s.body,
            Statement::Length(s) => &s.body,
            Statement::Range(s) => &s.body,
            Statement::Pattern(s) => &s.body,
            Statement::Enum(s) => &s.body,
            Statement::Bit(s) => &s.body,
            Statement::Unknown(s) => &s.body,
            _ => &[],
        }
    }

    /// The label this statement contributes to the resolver path — its
    /// name for named definitions/data-nodes, and for `augment`/
    /// `deviation`/`refine` the leaf segment of their path argument
    /// (§4.5 resolved Open Question 4). Returns `None` for statements
    /// that do not push a path segment.
    pub fn path_label(&self) -> Option<&str> {
        match self {
            Statement::Container(s)
            | Statement::Leaf(s)
            | Statement::LeafList(s)
            | Statement::List(s)
            | Statement::Choice(s)
            | Statement::Case(s)
            | Statement::Anydata(s)
            | Statement::Anyxml(s)
            | Statement::Rpc(s)
            | Statement::Action(s)
            | Statement::Notification(s)
            | Statement::Grouping(s)
            | Statement::Typedef(s)
            | Statement::Feature(s)
            | Statement::Identity(s)
            | Statement::Extension(s)
            | Statement::Enum(s)
            | Statement::Bit(s) => Some(s.name.local_name()),
            Statement::Input(_) => Some("input"),
            Statement::Output(_) => Some("output"),
            Statement::Augment(s) | Statement::Deviation(s) | Statement::Refine(s) => {
                s.path.segments().last().map(|id| id.local_name())
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------
// Shared leaf/body shapes
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StringArg {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringBodyStmt {
    pub value: String,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentArg {
    pub value: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolArg {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateArg {
    pub value: Date,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionArg {
    pub value: Version,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntArg {
    pub value: i64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathArg {
    pub value: SchemaPath,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinElementsArg {
    pub value: u64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaxElementsArg {
    pub value: MaxValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedByArg {
    pub value: OrderedBy,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusArg {
    pub value: Status,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BareBodyStmt {
    pub body: Vec<Statement>,
    pub span: Span,
}

/// Shape shared by every statement whose argument is a name and whose
/// body is an open-ended, order-preserving child list: `typedef`,
/// `grouping`, `container`, `leaf`, `leaf-list`, `list`, `choice`,
/// `case`, `anydata`, `anyxml`, `rpc`, `action`, `notification`,
/// `feature`, `identity`, `extension`, `enum`, `bit`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBodyStmt {
    pub name: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// `type` is its own shape: its argument is a type reference (built-in or
/// typedef), and its body's legal contents depend on that reference
/// (§4.4) — the parser does not attempt to disambiguate per base type
/// beyond recognizing the shared `type-body-statement` alternation, so
/// the body is the same open-ended `Vec<Statement>` as elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStmt {
    pub name: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsesStmt {
    pub grouping: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// `length`/`range`: the parsed interval expression plus an optional body
/// of `error-message`/`error-app-tag`/`description`/`reference`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBodyStmt {
    pub value: NumericRange,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternStmt {
    pub value: String,
    pub modifier: Option<InvertMatch>,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierArg {
    pub value: InvertMatch,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyStmt {
    pub identifiers: Vec<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueStmt {
    pub paths: Vec<Vec<Identifier>>,
    pub span: Span,
}

/// `augment`/`deviation`/`refine`: a schema-node-id argument plus a body.
#[derive(Debug, Clone, PartialEq)]
pub struct PathBodyStmt {
    pub path: SchemaPath,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviateStmt {
    pub kind: DeviateKind,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviateKind {
    Add,
    Replace,
    Delete,
    NotSupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentStmt {
    pub name: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub module: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncludeStmt {
    pub module: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BelongsToStmt {
    pub module: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevisionStmt {
    pub date: Date,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// Unknown (vendor extension) statement: `prefix:keyword` with an
/// optional string argument and optional body, preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownStmt {
    pub keyword: Identifier,
    pub argument: Option<String>,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// The `{ yang-version; namespace; prefix; }` header, plus everything
/// else the module aggregator (§4.6) hangs off a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleHeaderStmt {
    pub name: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmoduleHeaderStmt {
    pub name: Identifier,
    pub body: Vec<Statement>,
    pub span: Span,
}
