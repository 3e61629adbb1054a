//! Vendor extension statements (`prefix:keyword`) must parse like any
//! other statement, nest arbitrarily, and show up verbatim in the AST.

use yang_front::ast::Statement;
use yang_front::parse_module;

const MODULE_WITH_TAILF_EXTENSIONS: &str = r#"
    module example-tailf {
        namespace "urn:example:tailf";
        prefix ex;

        import tailf-common {
            prefix tailf;
        }

        container daemon {
            tailf:callpoint "daemon-cp" {
                tailf:transaction-hook "subtree";
            }

            leaf mode {
                type string;
                tailf:invocation-mode "active";
            }
        }
    }
"#;

#[test]
fn unknown_statements_parse_and_nest() {
    let outcome = parse_module(MODULE_WITH_TAILF_EXTENSIONS).unwrap();
    assert!(outcome.diagnostics.is_empty());

    let module = outcome.value;
    assert_eq!(module.sections.body.len(), 1);

    let daemon = match &module.sections.body[0] {
        Statement::Container(c) => c,
        other => panic!("expected container, got {other:?}"),
    };
    assert_eq!(daemon.body.len(), 2);

    let callpoint = match &daemon.body[0] {
        Statement::Unknown(u) => u,
        other => panic!("expected unknown statement, got {other:?}"),
    };
    assert_eq!(callpoint.keyword.to_string(), "tailf:callpoint");
    assert_eq!(callpoint.argument.as_deref(), Some("daemon-cp"));
    assert_eq!(callpoint.body.len(), 1);

    let hook = match &callpoint.body[0] {
        Statement::Unknown(u) => u,
        other => panic!("expected nested unknown statement, got {other:?}"),
    };
    assert_eq!(hook.keyword.to_string(), "tailf:transaction-hook");
    assert_eq!(hook.argument.as_deref(), Some("subtree"));
    assert!(hook.body.is_empty());

    let mode_leaf = match &daemon.body[1] {
        Statement::Leaf(l) => l,
        other => panic!("expected leaf, got {other:?}"),
    };
    assert_eq!(mode_leaf.body.len(), 2);
    assert!(matches!(mode_leaf.body[0], Statement::Type(_)));
    match &mode_leaf.body[1] {
        Statement::Unknown(u) => assert_eq!(u.keyword.to_string(), "tailf:invocation-mode"),
        other => panic!("expected unknown statement, got {other:?}"),
    }
}
