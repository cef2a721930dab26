//! ## Crate layout
//! - `build`: definition-graph codegen, run from build scripts.
//! - `core`: runtime used by generated modules (values, guards, lenses, codec seam).
//! - `paths`: runtime crate path resolution for generated code.
//! - `schema`: definition graph model and validation.
//!
//! A build script calls `protolens::build!("schema.json")`; the crate then
//! mounts every generated module with `protolens::include_accessors!()`.

pub use protolens_build as build;
pub use protolens_core as core;
pub use protolens_paths as paths;
pub use protolens_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use protolens_build::build;

/// Mount the module index written by `build!` from `OUT_DIR`.
#[macro_export]
macro_rules! include_accessors {
    () => {
        include!(concat!(env!("OUT_DIR"), "/__accessors.rs"));
    };
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        codec::{Codec, CodecError, EncodeOptions},
        error::InvalidArgument,
        message::Message,
        value::Value,
    };
}
