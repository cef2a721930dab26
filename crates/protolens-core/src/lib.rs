//! Runtime support for generated accessor modules: the dynamic message
//! representation, value guards, table-driven lenses and the codec seam.
#![warn(unreachable_pub)]

pub mod codec;
pub mod error;
pub mod guard;
pub mod lens;
pub mod message;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::InvalidArgument;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::InvalidArgument,
        guard::Guard,
        lens::{Lens, Step, Terminal},
        message::Message,
        value::Value,
    };
}
