mod field;
mod graph;
mod message;
mod name;

pub use field::Field;
pub use graph::DefinitionGraph;
pub use message::MessageDef;
pub use name::QualifiedName;

use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("message '{0}' is defined more than once")]
    DuplicateMessage(QualifiedName),

    #[error("message '{0}' not found")]
    MessageNotFound(String),
}
