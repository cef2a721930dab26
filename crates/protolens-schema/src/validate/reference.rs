use crate::{error::ErrorTree, node::DefinitionGraph};

// Every message-typed field must reference a defined message. Enum
// references are not checked: enum definitions live outside the graph.
pub fn validate_message_references(graph: &DefinitionGraph, errs: &mut ErrorTree) {
    for def in graph.iter() {
        let mut local = ErrorTree::new();

        for (field, target) in def.message_fields() {
            if !graph.contains(target.as_str()) {
                local.add_for(
                    &field.name,
                    format!("references undefined message '{target}'"),
                );
            }
        }

        errs.merge_for(def.name.as_str(), local);
    }
}
