//! Module aggregation: partitioning a module's or submodule's direct
//! children into RFC 7950 §7.1.1's ordered sections (header, linkage,
//! meta, revisions, body) and flagging statements that show up out of
//! that order.
//!
//! Ordering is checked, not enforced: a misplaced `import` after the
//! first data definition still ends up in `linkage`, just with a
//! `statement-out-of-order` warning attached, consistent with this
//! crate's general preference for lenient parsing over hard failure.

use crate::ast::Statement;
use crate::error::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Header,
    Linkage,
    Meta,
    Revisions,
    Body,
}

fn classify(stmt: &Statement) -> Option<Section> {
    match stmt {
        Statement::YangVersion(_)
        | Statement::Namespace(_)
        | Statement::Prefix(_)
        | Statement::BelongsTo(_) => Some(Section::Header),
        Statement::Import(_) | Statement::Include(_) => Some(Section::Linkage),
        Statement::Organization(_)
        | Statement::Contact(_)
        | Statement::Description(_)
        | Statement::Reference(_) => Some(Section::Meta),
        Statement::Revision(_) => Some(Section::Revisions),
        // Unknown (vendor extension) statements are legal anywhere in a
        // module body (RFC 7950 §6.2.1) and are exempt from ordering.
        Statement::Unknown(_) => None,
        _ => Some(Section::Body),
    }
}

/// A module's or submodule's direct children, partitioned into sections
/// and kept in source order within each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSections {
    pub header: Vec<Statement>,
    pub linkage: Vec<Statement>,
    pub meta: Vec<Statement>,
    pub revisions: Vec<Statement>,
    pub body: Vec<Statement>,
}

impl ModuleSections {
    /// All children across every section, in source order.
    pub fn all(&self) -> impl Iterator<Item = &Statement> {
        self.header
            .iter()
            .chain(self.linkage.iter())
            .chain(self.meta.iter())
            .chain(self.revisions.iter())
            .chain(self.body.iter())
    }
}

/// Partition `statements` into [`ModuleSections`], recording a
/// `statement-out-of-order` warning for each statement whose section
/// precedes one already seen.
pub fn aggregate(statements: Vec<Statement>, diagnostics: &mut Vec<Diagnostic>) -> ModuleSections {
    let mut sections = ModuleSections::default();
    let mut max_seen = Section::Header;

    for stmt in statements {
        let bucket = classify(&stmt);
        if let Some(section) = bucket {
            if section < max_seen {
                diagnostics.push(Diagnostic::warning(
                    "statement-out-of-order",
                    format!(
                        "`{}` appears after a later module section; RFC 7950 orders \
                         sections as header, linkage, meta, revisions, body",
                        stmt.keyword()
                    ),
                    stmt.span(),
                ));
            } else {
                max_seen = section;
            }
        }
        match bucket.unwrap_or(Section::Body) {
            Section::Header => sections.header.push(stmt),
            Section::Linkage => sections.linkage.push(stmt),
            Section::Meta => sections.meta.push(stmt),
            Section::Revisions => sections.revisions.push(stmt),
            Section::Body => sections.body.push(stmt),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, NamedBodyStmt, StringArg};
    use crate::base::{Position, Span};

    fn span() -> Span {
        Span::at(Position::new(0, 0))
    }

    fn container(name: &str) -> Statement {
        Statement::Container(NamedBodyStmt {
            name: Identifier::new(name, span()).unwrap(),
            body: vec![],
            span: span(),
        })
    }

    fn description() -> Statement {
        Statement::Description(StringArg { value: "x".into(), span: span() })
    }

    #[test]
    fn partitions_each_section() {
        let mut diags = Vec::new();
        let sections = aggregate(vec![description(), container("c")], &mut diags);
        assert_eq!(sections.meta.len(), 1);
        assert_eq!(sections.body.len(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn out_of_order_statement_is_flagged_but_still_placed() {
        let mut diags = Vec::new();
        let sections = aggregate(vec![container("c"), description()], &mut diags);
        assert_eq!(sections.meta.len(), 1);
        assert_eq!(sections.body.len(), 1);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, "statement-out-of-order");
    }

    #[test]
    fn unknown_statements_are_exempt_from_ordering() {
        use crate::ast::UnknownStmt;
        let unknown = Statement::Unknown(UnknownStmt {
            keyword: Identifier::new("tailf:foo", span()).unwrap(),
            argument: None,
            body: vec![],
            span: span(),
        });
        let mut diags = Vec::new();
        let sections = aggregate(vec![container("c"), unknown, description()], &mut diags);
        assert_eq!(sections.body.len(), 2);
        assert_eq!(diags.len(), 1);
    }
}
