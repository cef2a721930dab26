use crate::{
    node::QualifiedName,
    types::{FieldType, Occurrence},
};
use serde::{Deserialize, Serialize};

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: FieldType,

    #[serde(default)]
    pub occurrence: Occurrence,

    pub number: u32,
}

impl Field {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<FieldType>,
        occurrence: Occurrence,
        number: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            occurrence,
            number,
        }
    }

    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        self.occurrence.is_repeated()
    }

    /// Referenced message type, for message-typed fields.
    #[must_use]
    pub const fn message_type(&self) -> Option<&QualifiedName> {
        self.ty.as_message()
    }

    /// Human-readable reference back to the definition, e.g.
    /// `Person.address = 1 (optional message Address)`.
    #[must_use]
    pub fn describe(&self, owner: &QualifiedName) -> String {
        format!(
            "{owner}.{} = {} ({} {})",
            self.name, self.number, self.occurrence, self.ty
        )
    }
}
