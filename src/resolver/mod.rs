//! Definition/use resolution over a parsed module's statement tree.
//!
//! Every `typedef`/`grouping` gets a unique identity within its module: a
//! name plus a sequence number that counts occurrences of that name in
//! source order (so two sibling `typedef foo` definitions are
//! distinguishable as `foo#1` and `foo#2`). Every `type`/`uses` reference
//! starts out unresolved (`sequence: None`) and [`resolve`] fills it in
//! by walking outward from the reference's schema path to the nearest
//! enclosing definition of that name — the same lexical-scoping rule a
//! YANG compiler uses when a name is reused at different nesting levels.
//!
//! Cross-module resolution (following `import`/`include`) is out of
//! scope; a reference that doesn't resolve within its own module is left
//! with `sequence: None`, which is a legitimate outcome (it was
//! re-exported, not necessarily wrong), not an error.

use crate::ast::Statement;
use crate::base::{IStr, Interner};
use crate::parser::ParsedModule;
use indexmap::IndexMap;
use std::rc::Rc;

/// A location in the schema tree: the chain of ancestor node names
/// leading to (but not including) the node this path was recorded for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(pub Vec<IStr>);

impl NodePath {
    /// Whether `self` is a (non-strict) prefix of `other` — i.e. whether
    /// a definition recorded at `self` is visible from a reference
    /// recorded at `other`.
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        self.0.len() <= other.0.len() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.0.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join("/"))
    }
}

/// What kind of definition or use a [`Node`] represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A `typedef` statement: its name and its 1-based occurrence count
    /// for that name within the module.
    TypeDefinition { name: IStr, sequence: u32 },
    /// A `grouping` statement: its name and 1-based occurrence count.
    GroupingDefinition { name: IStr, sequence: u32 },
    /// A `type` statement referencing a (possibly not built-in) name.
    /// `sequence` is `None` until [`resolve`] runs, then holds the
    /// matching definition's sequence number if one was found in scope.
    TypeUse { name: IStr, sequence: Option<u32> },
    /// A `uses` statement referencing a grouping name.
    GroupingUse { name: IStr, sequence: Option<u32> },
}

impl NodeKind {
    pub fn name(&self) -> &IStr {
        match self {
            NodeKind::TypeDefinition { name, .. }
            | NodeKind::GroupingDefinition { name, .. }
            | NodeKind::TypeUse { name, .. }
            | NodeKind::GroupingUse { name, .. } => name,
        }
    }

    pub fn is_definition(&self) -> bool {
        matches!(self, NodeKind::TypeDefinition { .. } | NodeKind::GroupingDefinition { .. })
    }

    pub fn is_use(&self) -> bool {
        matches!(self, NodeKind::TypeUse { .. } | NodeKind::GroupingUse { .. })
    }
}

/// One definition or use site, located by its enclosing schema path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: NodePath,
    pub kind: NodeKind,
}

/// Per-module state: the name-recurrence counters that give definitions
/// their sequence numbers, and the interner that backs every [`IStr`]
/// produced while walking the module (path segments, definition/use
/// names alike) so recurring text shares one allocation.
#[derive(Default)]
struct Counters {
    interner: Interner,
    types: IndexMap<IStr, u32>,
    groupings: IndexMap<IStr, u32>,
}

impl Counters {
    fn intern(&mut self, name: &str) -> IStr {
        self.interner.intern(name)
    }

    fn next_type(&mut self, name: &str) -> (IStr, u32) {
        let name = self.interner.intern(name);
        let counter = self.types.entry(Rc::clone(&name)).or_insert(0);
        *counter += 1;
        (name, *counter)
    }

    fn next_grouping(&mut self, name: &str) -> (IStr, u32) {
        let name = self.interner.intern(name);
        let counter = self.groupings.entry(Rc::clone(&name)).or_insert(0);
        *counter += 1;
        (name, *counter)
    }
}

/// Walk `module`'s full statement tree depth-first, producing a [`Node`]
/// for every `typedef`, `grouping`, `type`, and `uses` statement whose
/// *statement* satisfies `predicate`.
///
/// `predicate` only decides whether a matching statement's `Node` is
/// included in the result; it never stops the traversal from descending
/// into that statement's children.
pub fn collect_definitions(
    module: &ParsedModule,
    predicate: impl Fn(&Statement) -> bool,
) -> Vec<Node> {
    let mut counters = Counters::default();
    let mut path = Vec::new();
    let mut out = Vec::new();
    for stmt in module.all_statements() {
        visit(stmt, &mut path, &mut counters, &predicate, &mut out);
    }
    out
}

fn visit(
    stmt: &Statement,
    path: &mut Vec<IStr>,
    counters: &mut Counters,
    predicate: &impl Fn(&Statement) -> bool,
    out: &mut Vec<Node>,
) {
    let kind = match stmt {
        Statement::Typedef(t) => {
            let (name, sequence) = counters.next_type(t.name.local_name());
            Some(NodeKind::TypeDefinition { name, sequence })
        }
        Statement::Grouping(g) => {
            let (name, sequence) = counters.next_grouping(g.name.local_name());
            Some(NodeKind::GroupingDefinition { name, sequence })
        }
        Statement::Type(t) => {
            let name = counters.intern(t.name.local_name());
            Some(NodeKind::TypeUse { name, sequence: None })
        }
        Statement::Uses(u) => {
            let name = counters.intern(u.grouping.local_name());
            Some(NodeKind::GroupingUse { name, sequence: None })
        }
        _ => None,
    };

    if let Some(kind) = kind {
        if predicate(stmt) {
            out.push(Node { path: NodePath(path.clone()), kind });
        }
    }

    if let Some(segments) = schema_path_segments(stmt) {
        for seg in &segments {
            path.push(counters.intern(seg));
        }
        for child in stmt.body() {
            visit(child, path, counters, predicate, out);
        }
        for _ in 0..segments.len() {
            path.pop();
        }
        return;
    }

    match stmt.path_label() {
        Some(label) => {
            path.push(counters.intern(label));
            for child in stmt.body() {
                visit(child, path, counters, predicate, out);
            }
            path.pop();
        }
        None => {
            for child in stmt.body() {
                visit(child, path, counters, predicate, out);
            }
        }
    }
}

/// `augment`/`deviation`/`refine` target a multi-segment schema path; every
/// segment is an ancestor scope for the statement's body, not just the
/// last one (a `typedef` nested three path segments deep must sit at depth
/// three, not depth one, or it would wrongly shadow/be-shadowed-by
/// definitions at an intermediate level).
fn schema_path_segments(stmt: &Statement) -> Option<Vec<&str>> {
    let path = match stmt {
        Statement::Augment(s) => &s.path,
        Statement::Deviation(s) => &s.path,
        Statement::Refine(s) => &s.path,
        _ => return None,
    };
    Some(path.segments().iter().map(|segment| segment.local_name()).collect())
}

/// Fill in every unresolved `type`/`uses` reference's sequence number by
/// finding the nearest enclosing definition of the same name (the
/// longest definition path that is a prefix of the use's path). Leaves
/// `sequence: None` for references with no matching definition anywhere
/// in `nodes` (built-in types, or names defined in another module).
pub fn resolve(nodes: Vec<Node>) -> Vec<Node> {
    let mut type_defs: IndexMap<IStr, Vec<(NodePath, u32)>> = IndexMap::new();
    let mut grouping_defs: IndexMap<IStr, Vec<(NodePath, u32)>> = IndexMap::new();

    for node in &nodes {
        match &node.kind {
            NodeKind::TypeDefinition { name, sequence } => {
                type_defs.entry(Rc::clone(name)).or_default().push((node.path.clone(), *sequence));
            }
            NodeKind::GroupingDefinition { name, sequence } => {
                grouping_defs.entry(Rc::clone(name)).or_default().push((node.path.clone(), *sequence));
            }
            _ => {}
        }
    }

    nodes
        .into_iter()
        .map(|node| match node.kind {
            NodeKind::TypeUse { name, sequence: None } => {
                let sequence = nearest_enclosing(&type_defs, &name, &node.path);
                Node { path: node.path, kind: NodeKind::TypeUse { name, sequence } }
            }
            NodeKind::GroupingUse { name, sequence: None } => {
                let sequence = nearest_enclosing(&grouping_defs, &name, &node.path);
                Node { path: node.path, kind: NodeKind::GroupingUse { name, sequence } }
            }
            kind => Node { path: node.path, kind },
        })
        .collect()
}

/// Among definitions whose path encloses `use_path`, prefer the most
/// deeply nested one (the innermost shadowing scope); break ties between
/// equally deep definitions by preferring the earlier (lower-sequence)
/// one, so two same-scope same-name definitions resolve deterministically
/// to the first.
fn nearest_enclosing(
    defs: &IndexMap<IStr, Vec<(NodePath, u32)>>,
    name: &IStr,
    use_path: &NodePath,
) -> Option<u32> {
    let mut best: Option<(usize, u32)> = None;
    for (def_path, sequence) in defs.get(name)? {
        if !def_path.is_prefix_of(use_path) {
            continue;
        }
        let depth = def_path.0.len();
        best = match best {
            Some((best_depth, best_seq)) if depth < best_depth => Some((best_depth, best_seq)),
            Some((best_depth, best_seq)) if depth == best_depth && *sequence >= best_seq => {
                Some((best_depth, best_seq))
            }
            _ => Some((depth, *sequence)),
        };
    }
    best.map(|(_, sequence)| sequence)
}

/// Convenience: collect every definition and use in `module`, then
/// resolve references in one call.
pub fn resolve_module(module: &ParsedModule) -> Vec<Node> {
    resolve(collect_definitions(module, |_| true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_module;

    #[test]
    fn sibling_typedefs_get_distinct_sequences() {
        let module = parse_module(
            r#"
            module m {
                namespace "urn:m";
                prefix m;
                typedef foo { type string; }
                typedef foo { type string; }
                leaf x { type foo; }
            }
            "#,
        )
        .unwrap()
        .value;

        let nodes = resolve_module(&module);
        let defs: Vec<_> = nodes
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::TypeDefinition { name, sequence } if name.as_ref() == "foo" => Some(*sequence),
                _ => None,
            })
            .collect();
        assert_eq!(defs, vec![1, 2]);

        let use_seq = nodes.iter().find_map(|n| match &n.kind {
            NodeKind::TypeUse { name, sequence } if name.as_ref() == "foo" => Some(*sequence),
            _ => None,
        });
        assert_eq!(use_seq, Some(Some(1)));
    }

    #[test]
    fn nested_scope_shadows_the_module_level_definition() {
        let module = parse_module(
            r#"
            module m {
                namespace "urn:m";
                prefix m;
                typedef foo { type string; }
                container c {
                    typedef foo { type uint8; }
                    leaf y { type foo; }
                }
            }
            "#,
        )
        .unwrap()
        .value;

        let nodes = resolve_module(&module);
        let use_node = nodes
            .iter()
            .find(|n| matches!(&n.kind, NodeKind::TypeUse { name, .. } if name.as_ref() == "foo"))
            .unwrap();
        match use_node.kind {
            NodeKind::TypeUse { sequence, .. } => assert_eq!(sequence, Some(2)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn unresolved_built_in_type_keeps_none() {
        let module = parse_module(
            r#"module m { namespace "urn:m"; prefix m; leaf x { type string; } }"#,
        )
        .unwrap()
        .value;
        let nodes = resolve_module(&module);
        let use_node = nodes
            .iter()
            .find(|n| matches!(&n.kind, NodeKind::TypeUse { .. }))
            .unwrap();
        match use_node.kind {
            NodeKind::TypeUse { sequence, .. } => assert_eq!(sequence, None),
            _ => unreachable!(),
        }
    }

    #[test]
    fn predicate_prunes_output_without_pruning_traversal() {
        let module = parse_module(
            r#"
            module m {
                namespace "urn:m";
                prefix m;
                grouping g {
                    typedef inner { type string; }
                }
            }
            "#,
        )
        .unwrap()
        .value;

        let nodes = collect_definitions(&module, |stmt| !matches!(stmt, Statement::Grouping(_)));
        assert!(!nodes.iter().any(|n| matches!(n.kind, NodeKind::GroupingDefinition { .. })));
        assert!(nodes.iter().any(|n| matches!(n.kind, NodeKind::TypeDefinition { .. })));
    }

    #[test]
    fn augment_pushes_every_path_segment_not_just_the_last() {
        let module = parse_module(
            r#"
            module m {
                namespace "urn:m";
                prefix m;
                container system { container services; }
                augment "/system/services" {
                    typedef foo { type string; }
                }
            }
            "#,
        )
        .unwrap()
        .value;

        let nodes = collect_definitions(&module, |_| true);
        let def = nodes
            .iter()
            .find(|n| matches!(&n.kind, NodeKind::TypeDefinition { name, .. } if name.as_ref() == "foo"))
            .unwrap();
        assert_eq!(def.path.0.len(), 2);
        assert_eq!(def.path.0[0].as_ref(), "system");
        assert_eq!(def.path.0[1].as_ref(), "services");
    }

    #[test]
    fn node_path_prefix_check() {
        let root = NodePath(vec![]);
        let nested = NodePath(vec![Rc::from("a"), Rc::from("b")]);
        assert!(root.is_prefix_of(&nested));
        assert!(!nested.is_prefix_of(&root));
    }
}
