use crate::node::QualifiedName;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// ScalarKind
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum ScalarKind {
    #[display("bool")]
    Bool,
    #[display("bytes")]
    Bytes,
    #[display("double")]
    Double,
    #[display("fixed32")]
    Fixed32,
    #[display("fixed64")]
    Fixed64,
    #[display("float")]
    Float,
    #[display("int32")]
    Int32,
    #[display("int64")]
    Int64,
    #[display("sfixed32")]
    Sfixed32,
    #[display("sfixed64")]
    Sfixed64,
    #[display("sint32")]
    Sint32,
    #[display("sint64")]
    Sint64,
    #[display("string")]
    String,
    #[display("uint32")]
    Uint32,
    #[display("uint64")]
    Uint64,
}

impl ScalarKind {
    pub const ALL: [Self; 15] = [
        Self::Bool,
        Self::Bytes,
        Self::Double,
        Self::Fixed32,
        Self::Fixed64,
        Self::Float,
        Self::Int32,
        Self::Int64,
        Self::Sfixed32,
        Self::Sfixed64,
        Self::Sint32,
        Self::Sint64,
        Self::String,
        Self::Uint32,
        Self::Uint64,
    ];

    #[must_use]
    pub const fn is_signed_int(self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Int64 | Self::Sint32 | Self::Sint64 | Self::Sfixed32 | Self::Sfixed64
        )
    }

    #[must_use]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            Self::Uint32 | Self::Uint64 | Self::Fixed32 | Self::Fixed64
        )
    }

    #[must_use]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| format!("unknown scalar kind '{s}'"))
    }
}

///
/// Occurrence
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    #[display("required")]
    Required,
    #[default]
    #[display("optional")]
    Optional,
    #[display("repeated")]
    Repeated,
}

impl Occurrence {
    #[must_use]
    pub const fn is_repeated(self) -> bool {
        matches!(self, Self::Repeated)
    }
}

///
/// FieldType
///
/// `Enum` and `Message` carry the qualified name of the referenced type.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Scalar(ScalarKind),
    Enum(QualifiedName),
    Message(QualifiedName),
}

impl FieldType {
    #[must_use]
    pub fn message(name: impl Into<QualifiedName>) -> Self {
        Self::Message(name.into())
    }

    #[must_use]
    pub fn enumeration(name: impl Into<QualifiedName>) -> Self {
        Self::Enum(name.into())
    }

    /// Referenced message type, if this is a message-typed field.
    #[must_use]
    pub const fn as_message(&self) -> Option<&QualifiedName> {
        match self {
            Self::Message(name) => Some(name),
            Self::Scalar(_) | Self::Enum(_) => None,
        }
    }
}

impl From<ScalarKind> for FieldType {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Enum(name) => write!(f, "enum {name}"),
            Self::Message(name) => write!(f, "message {name}"),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_parse_from_their_display_form() {
        for kind in ScalarKind::ALL {
            assert_eq!(kind.to_string().parse::<ScalarKind>(), Ok(kind));
        }
        assert!("varint".parse::<ScalarKind>().is_err());
    }

    #[test]
    fn integer_families_are_disjoint() {
        for kind in ScalarKind::ALL {
            assert!(!(kind.is_signed_int() && kind.is_unsigned_int()), "{kind}");
            assert!(!(kind.is_int() && kind.is_float()), "{kind}");
        }
        assert!(ScalarKind::Fixed64.is_unsigned_int());
        assert!(ScalarKind::Sfixed32.is_signed_int());
    }

    #[test]
    fn field_type_serializes_externally_tagged() {
        let ty = FieldType::message("Company.Job");
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#"{"message":"Company.Job"}"#);

        let scalar: FieldType = serde_json::from_str(r#"{"scalar":"sfixed64"}"#).unwrap();
        assert_eq!(scalar, FieldType::Scalar(ScalarKind::Sfixed64));
    }

    #[test]
    fn field_type_display_names_the_reference() {
        assert_eq!(FieldType::enumeration("Color").to_string(), "enum Color");
        assert_eq!(FieldType::from(ScalarKind::Bytes).to_string(), "bytes");
    }
}
