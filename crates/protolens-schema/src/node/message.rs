use crate::node::{Field, QualifiedName};
use serde::{Deserialize, Serialize};

///
/// MessageDef
///
/// Field order is declaration order and is preserved in generated output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageDef {
    pub name: QualifiedName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl MessageDef {
    #[must_use]
    pub fn new(name: impl Into<QualifiedName>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Message-typed fields with their referenced type, in declaration order.
    pub fn message_fields(&self) -> impl Iterator<Item = (&Field, &QualifiedName)> {
        self.fields
            .iter()
            .filter_map(|field| field.message_type().map(|ty| (field, ty)))
    }
}
