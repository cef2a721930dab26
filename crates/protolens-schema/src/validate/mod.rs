//! Definition-graph validation orchestration.

pub mod field;
pub mod naming;
pub mod reference;

use crate::{error::ErrorTree, node::DefinitionGraph};

/// Run full graph validation in a staged, deterministic order.
pub fn validate_graph(graph: &DefinitionGraph) -> Result<(), ErrorTree> {
    // Phase 1: per-message invariants.
    let mut errors = validate_messages(graph);

    // Phase 2: graph-wide invariants.
    validate_global(graph, &mut errors);

    errors.result()
}

fn validate_messages(graph: &DefinitionGraph) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for def in graph.iter() {
        let mut errs = ErrorTree::new();
        naming::validate_message_name(def, &mut errs);
        field::validate_fields(def, &mut errs);

        errors.merge_for(def.name.as_str(), errs);
    }

    errors
}

fn validate_global(graph: &DefinitionGraph, errors: &mut ErrorTree) {
    naming::validate_module_identities(graph, errors);
    reference::validate_message_references(graph, errors);
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{Field, MessageDef},
        types::{FieldType, Occurrence, ScalarKind},
    };

    #[test]
    fn well_formed_graph_passes() {
        let graph = DefinitionGraph::from_defs([
            MessageDef::new(
                "Company",
                vec![Field::new(
                    "jobs",
                    FieldType::message("Company.Job"),
                    Occurrence::Repeated,
                    1,
                )],
            ),
            MessageDef::new(
                "Company.Job",
                vec![Field::new("title", ScalarKind::String, Occurrence::Optional, 1)],
            ),
        ])
        .unwrap();

        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn errors_are_routed_per_message() {
        let graph = DefinitionGraph::from_defs([MessageDef::new(
            "Person",
            vec![
                Field::new("id", ScalarKind::Int32, Occurrence::Required, 1),
                Field::new("id", ScalarKind::Int64, Occurrence::Optional, 1),
                Field::new("home", FieldType::message("Home"), Occurrence::Optional, 2),
            ],
        )])
        .unwrap();

        let errs = validate_graph(&graph).unwrap_err();
        let routes: Vec<_> = errs.flatten().into_iter().map(|(route, _)| route).collect();

        assert_eq!(errs.len(), 3, "{errs}");
        assert!(routes.iter().all(|route| route.starts_with("Person")));
    }
}
