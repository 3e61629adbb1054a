//! End-to-end check that sibling definitions get distinct sequence
//! numbers and that references resolve to the correct one.

use yang_front::ast::Statement;
use yang_front::parse_module;
use yang_front::resolver::{resolve_module, NodeKind};

const MODULE: &str = r#"
    module example-groupings {
        namespace "urn:example:groupings";
        prefix eg;

        grouping address-fields {
            leaf street { type string; }
            leaf city { type string; }
        }

        grouping address-fields {
            leaf line1 { type string; }
        }

        typedef percentage {
            type uint8 { range "0..100"; }
        }

        container home {
            uses address-fields;
            leaf completion { type percentage; }
        }
    }
"#;

#[test]
fn duplicate_grouping_names_get_sequential_identities() {
    let module = parse_module(MODULE).unwrap().value;
    let nodes = resolve_module(&module);

    let mut grouping_sequences: Vec<u32> = nodes
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::GroupingDefinition { name, sequence } if name.as_ref() == "address-fields" => {
                Some(*sequence)
            }
            _ => None,
        })
        .collect();
    grouping_sequences.sort_unstable();
    assert_eq!(grouping_sequences, vec![1, 2]);
}

#[test]
fn uses_without_a_qualifier_resolves_to_the_first_definition() {
    let module = parse_module(MODULE).unwrap().value;
    let nodes = resolve_module(&module);

    let uses_sequence = nodes.iter().find_map(|n| match &n.kind {
        NodeKind::GroupingUse { name, sequence } if name.as_ref() == "address-fields" => Some(*sequence),
        _ => None,
    });
    assert_eq!(uses_sequence, Some(Some(1)));
}

#[test]
fn typedef_reference_resolves_across_a_sibling_container() {
    let module = parse_module(MODULE).unwrap().value;
    let nodes = resolve_module(&module);

    let typedef_sequence = nodes.iter().find_map(|n| match &n.kind {
        NodeKind::TypeDefinition { name, sequence } if name.as_ref() == "percentage" => Some(*sequence),
        _ => None,
    });
    assert_eq!(typedef_sequence, Some(1));

    let use_sequence = nodes.iter().find_map(|n| match &n.kind {
        NodeKind::TypeUse { name, sequence } if name.as_ref() == "percentage" => Some(*sequence),
        _ => None,
    });
    assert_eq!(use_sequence, Some(Some(1)));
}

#[test]
fn built_in_range_bound_type_inside_typedef_stays_unresolved() {
    let module = parse_module(MODULE).unwrap().value;
    let nodes = resolve_module(&module);

    let uint8_use = nodes.iter().find_map(|n| match &n.kind {
        NodeKind::TypeUse { name, sequence } if name.as_ref() == "uint8" => Some(*sequence),
        _ => None,
    });
    assert_eq!(uint8_use, Some(None));
}

#[test]
fn every_definition_has_a_path_label_matching_its_name() {
    let module = parse_module(MODULE).unwrap().value;
    let groupings: Vec<_> = module
        .sections
        .body
        .iter()
        .filter(|s| matches!(s, Statement::Grouping(_)))
        .collect();
    assert_eq!(groupings.len(), 2);
    for g in groupings {
        assert_eq!(g.path_label(), Some("address-fields"));
    }
}
