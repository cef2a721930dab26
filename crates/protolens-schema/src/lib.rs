//! Message-type definition graph consumed by the accessor generator.
//!
//! The graph is produced by an external schema compiler and is read-only for
//! the duration of a generation pass.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for a single qualified-name segment or field identifier.
pub const MAX_IDENT_LEN: usize = 64;

/// Maximum protobuf-style field number.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{FieldType, Occurrence, ScalarKind},
    };
    pub use serde::{Deserialize, Serialize};
}
