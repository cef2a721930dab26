use crate::{guard::Guard, value::Value};
use thiserror::Error as ThisError;

///
/// InvalidArgument
///
/// A `set`/`add` value failed the field's guard. Recoverable: the root that
/// was passed in is never modified.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid argument for '{path}': expected {expected}, found {found}")]
pub struct InvalidArgument {
    pub path: String,
    pub expected: String,
    pub found: String,
}

impl InvalidArgument {
    pub(crate) fn guard(path: String, guard: Guard<'_>, value: &Value) -> Self {
        let found = match value {
            Value::Message(message) => format!("message '{}'", message.type_name()),
            other => other.kind().to_string(),
        };

        Self {
            path,
            expected: guard.to_string(),
            found,
        }
    }

    pub(crate) fn not_repeated(path: String) -> Self {
        Self {
            path,
            expected: "a repeated field".to_string(),
            found: "a singular field".to_string(),
        }
    }
}
