//! Codec seam.
//!
//! Wire encoding belongs to an external codec runtime. Generated modules
//! only declare `encode`/`encode_with`/`decode` and route them through the
//! functions here, which pin the message type before delegating to `C`.

use crate::message::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// EncodeOptions
/// Passed through to the codec untouched.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EncodeOptions {
    /// Ask the codec to verify the value against its schema before encoding.
    #[serde(default)]
    pub verify: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, String>,
}

impl EncodeOptions {
    #[must_use]
    pub const fn verified() -> Self {
        Self {
            verify: true,
            flags: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }
}

///
/// CodecError
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("expected a '{expected}' message, found '{found}'")]
    TypeMismatch { expected: String, found: String },

    #[error(transparent)]
    Codec(Box<dyn std::error::Error + Send + Sync>),
}

impl CodecError {
    pub fn codec(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Codec(Box::new(err))
    }
}

///
/// Codec
///
/// Implemented by the external runtime that owns the wire format.
///

pub trait Codec {
    fn encode(
        type_name: &str,
        value: &Message,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, CodecError>;

    fn decode(type_name: &str, bytes: &[u8]) -> Result<Message, CodecError>;
}

/// Encode `value` as `type_name`, rejecting instances of another type.
pub fn encode<C: Codec>(
    type_name: &str,
    value: &Message,
    options: &EncodeOptions,
) -> Result<Vec<u8>, CodecError> {
    ensure_type(type_name, value)?;

    C::encode(type_name, value, options)
}

/// Decode `bytes` as `type_name`; the codec must hand back that type.
pub fn decode<C: Codec>(type_name: &str, bytes: &[u8]) -> Result<Message, CodecError> {
    let message = C::decode(type_name, bytes)?;
    ensure_type(type_name, &message)?;

    Ok(message)
}

fn ensure_type(type_name: &str, value: &Message) -> Result<(), CodecError> {
    if value.type_name() == type_name {
        Ok(())
    } else {
        Err(CodecError::TypeMismatch {
            expected: type_name.to_string(),
            found: value.type_name().to_string(),
        })
    }
}

///
/// TESTS
///
