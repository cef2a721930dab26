use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Message
///
/// Dynamic instance of a message type. A missing key and an explicit
/// `Value::Unset` both mean the field is unset.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    type_name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, Value>,
}

impl Message {
    /// All-unset instance of `type_name`.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Field value, or `None` when unset.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_unset())
    }

    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Set fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_unset())
            .map(|(name, value)| (name.as_str(), value))
    }

    // slot for `field`, created unset if missing
    pub(crate) fn slot_mut(&mut self, field: &str) -> &mut Value {
        self.fields.entry(field.to_string()).or_default()
    }
}

///
/// TESTS
///
