use crate::value::Value;
use derive_more::Display;

///
/// Guard
///
/// Runtime value predicate for a field. Generated accessors check the
/// incoming value against the terminal field's guard before writing.
///
/// `Symbol` accepts any symbolic identifier; it does not check membership
/// in the enum's declared values.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Guard<'a> {
    #[display("a finite ordered sequence")]
    Sequence,
    #[display("an integer")]
    Integer,
    #[display("a non-negative integer")]
    Unsigned,
    #[display("a boolean")]
    Bool,
    #[display("a floating-point number")]
    Float,
    #[display("a character sequence")]
    Text,
    #[display("a byte sequence")]
    Bytes,
    #[display("a symbolic identifier")]
    Symbol,
    #[display("an instance of message '{_0}'")]
    Message(&'a str),
}

impl Guard<'_> {
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Sequence, Value::List(_))
            | (Self::Integer, Value::Int(_) | Value::Uint(_))
            | (Self::Unsigned, Value::Uint(_))
            | (Self::Bool, Value::Bool(_))
            | (Self::Float, Value::Float(_))
            | (Self::Text, Value::Text(_))
            | (Self::Bytes, Value::Bytes(_))
            | (Self::Symbol, Value::Enum(_)) => true,
            (Self::Unsigned, Value::Int(n)) => *n >= 0,
            (Self::Message(ty), Value::Message(message)) => message.type_name() == *ty,
            _ => false,
        }
    }
}

///
/// TESTS
///
