//! The `example-system` module from RFC 7950 §4.2.2.5, parsed end to
//! end and checked structurally.

use yang_front::ast::Statement;
use yang_front::parse_module;

const EXAMPLE_SYSTEM: &str = r#"
    module example-system {
        yang-version 1.1;
        namespace "urn:example:system";
        prefix "sys";

        organization "Example Inc.";
        contact "support at example.com";

        description
            "The module for entities implementing the Example system.";

        revision 2007-06-09 {
            description "Initial revision.";
        }

        container system {
            leaf host-name {
                type string;
                description "Hostname for this system.";
            }

            leaf-list domain-search {
                type string;
                description "List of domain names to search.";
            }

            container login {
                leaf message {
                    type string;
                    description
                        "Message given at start of login session.";
                }

                list user {
                    key "name";

                    leaf name {
                        type string;
                    }

                    leaf full-name {
                        type string;
                    }

                    leaf class {
                        type string;
                    }
                }
            }
        }
    }
"#;

#[test]
fn example_system_parses_with_no_diagnostics() {
    let outcome = parse_module(EXAMPLE_SYSTEM).unwrap();
    assert!(outcome.diagnostics.is_empty(), "unexpected diagnostics: {:?}", outcome.diagnostics);
}

#[test]
fn header_and_meta_sections_are_correctly_partitioned() {
    let module = parse_module(EXAMPLE_SYSTEM).unwrap().value;
    assert_eq!(module.name.to_string(), "example-system");
    assert_eq!(module.sections.header.len(), 3); // yang-version, namespace, prefix
    assert_eq!(module.sections.meta.len(), 3); // organization, contact, description
    assert_eq!(module.sections.revisions.len(), 1);
    assert_eq!(module.sections.body.len(), 1); // container system
}

#[test]
fn revision_carries_its_date_and_description() {
    let module = parse_module(EXAMPLE_SYSTEM).unwrap().value;
    match &module.sections.revisions[0] {
        Statement::Revision(r) => {
            assert_eq!(r.date.to_string(), "2007-06-09");
            assert_eq!(r.body.len(), 1);
            assert!(matches!(r.body[0], Statement::Description(_)));
        }
        other => panic!("expected revision, got {other:?}"),
    }
}

#[test]
fn system_container_has_three_direct_children() {
    let module = parse_module(EXAMPLE_SYSTEM).unwrap().value;
    let system = match &module.sections.body[0] {
        Statement::Container(c) => c,
        other => panic!("expected container, got {other:?}"),
    };
    assert_eq!(system.name.to_string(), "system");
    assert_eq!(system.body.len(), 3);
    assert!(matches!(system.body[0], Statement::Leaf(_)));
    assert!(matches!(system.body[1], Statement::LeafList(_)));
    assert!(matches!(system.body[2], Statement::Container(_)));
}

#[test]
fn user_list_has_a_single_string_key_and_three_leaves() {
    let module = parse_module(EXAMPLE_SYSTEM).unwrap().value;
    let system = match &module.sections.body[0] {
        Statement::Container(c) => c,
        _ => unreachable!(),
    };
    let login = match &system.body[2] {
        Statement::Container(c) => c,
        _ => unreachable!(),
    };
    let user = login
        .body
        .iter()
        .find_map(|s| match s {
            Statement::List(l) if l.name.to_string() == "user" => Some(l),
            _ => None,
        })
        .expect("user list present");

    let key = user.body.iter().find_map(|s| match s {
        Statement::Key(k) => Some(k),
        _ => None,
    });
    let key = key.expect("key statement present");
    assert_eq!(key.identifiers.len(), 1);
    assert_eq!(key.identifiers[0].to_string(), "name");

    let leaf_count = user.body.iter().filter(|s| matches!(s, Statement::Leaf(_))).count();
    assert_eq!(leaf_count, 3);
}
