use crate::node::{MessageDef, NodeError, QualifiedName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// DefinitionGraph
///
/// Message definitions keyed by qualified name. Iteration follows
/// definition order so that generation is reproducible.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "GraphRepr", into = "GraphRepr")]
pub struct DefinitionGraph {
    messages: Vec<MessageDef>,
    index: BTreeMap<QualifiedName, usize>,
}

impl DefinitionGraph {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Build a graph from definitions, rejecting duplicate names.
    pub fn from_defs(defs: impl IntoIterator<Item = MessageDef>) -> Result<Self, NodeError> {
        let mut graph = Self::new();
        for def in defs {
            graph.insert(def)?;
        }

        Ok(graph)
    }

    pub fn insert(&mut self, def: MessageDef) -> Result<(), NodeError> {
        if self.index.contains_key(&def.name) {
            return Err(NodeError::DuplicateMessage(def.name));
        }

        self.index.insert(def.name.clone(), self.messages.len());
        self.messages.push(def);

        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MessageDef> {
        self.index.get(name).map(|&i| &self.messages[i])
    }

    /// Like `get`, but as an error for call sites that require the node.
    pub fn try_get(&self, name: &str) -> Result<&MessageDef, NodeError> {
        self.get(name)
            .ok_or_else(|| NodeError::MessageNotFound(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Definitions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageDef> {
        self.messages.iter()
    }

    /// Names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.messages.iter().map(|def| &def.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

///
/// GraphRepr
/// Serialized form: `{ "messages": [ ... ] }` in definition order.
///

#[derive(Deserialize, Serialize)]
struct GraphRepr {
    #[serde(default)]
    messages: Vec<MessageDef>,
}

impl TryFrom<GraphRepr> for DefinitionGraph {
    type Error = NodeError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        Self::from_defs(repr.messages)
    }
}

impl From<DefinitionGraph> for GraphRepr {
    fn from(graph: DefinitionGraph) -> Self {
        Self {
            messages: graph.messages,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::Field,
        types::{FieldType, Occurrence, ScalarKind},
    };

    fn person() -> MessageDef {
        MessageDef::new(
            "Person",
            vec![
                Field::new("name", ScalarKind::String, Occurrence::Required, 1),
                Field::new(
                    "address",
                    FieldType::message("Address"),
                    Occurrence::Optional,
                    2,
                ),
            ],
        )
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = DefinitionGraph::from_defs([person(), person()]).unwrap_err();
        assert_eq!(err, NodeError::DuplicateMessage("Person".into()));
    }

    #[test]
    fn iteration_follows_definition_order() {
        let graph = DefinitionGraph::from_defs([
            MessageDef::new("Zeta", vec![]),
            person(),
            MessageDef::new("Address", vec![]),
        ])
        .unwrap();

        let names: Vec<_> = graph.names().map(QualifiedName::as_str).collect();
        assert_eq!(names, ["Zeta", "Person", "Address"]);
        assert_eq!(graph.get("Person").unwrap().fields.len(), 2);
        assert!(graph.try_get("Missing").is_err());
    }

    #[test]
    fn deserializes_from_message_list() {
        let json = r#"{
            "messages": [
                { "name": "Address" },
                { "name": "Person", "fields": [
                    { "name": "address", "type": { "message": "Address" }, "number": 1 },
                    { "name": "tags", "type": { "scalar": "string" }, "occurrence": "repeated", "number": 2 }
                ] }
            ]
        }"#;

        let graph: DefinitionGraph = serde_json::from_str(json).unwrap();
        let person = graph.get("Person").unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(person.fields[0].occurrence, Occurrence::Optional);
        assert!(person.fields[1].is_repeated());
        assert_eq!(
            person.message_fields().map(|(f, _)| f.name.as_str()).collect::<Vec<_>>(),
            ["address"]
        );
    }

    #[test]
    fn deserializing_duplicates_fails() {
        let json = r#"{ "messages": [ { "name": "A" }, { "name": "A" } ] }"#;
        assert!(serde_json::from_str::<DefinitionGraph>(json).is_err());
    }

    #[test]
    fn serialization_round_trips() {
        let graph = DefinitionGraph::from_defs([person(), MessageDef::new("Address", vec![])])
            .unwrap();
        let json = serde_json::to_string(&graph).unwrap();

        assert_eq!(serde_json::from_str::<DefinitionGraph>(&json).unwrap(), graph);
    }
}
