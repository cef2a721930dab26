//! Accessor code generation.
//!
//! A pass validates the definition graph, classifies every message edge as
//! inline or opaque, resolves the root types, flattens each module's fields
//! into accessor chains and emits one Rust source unit per module.

pub mod chain;
pub mod classify;
pub mod compile;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod generator;
pub mod guard;
mod macros;
pub mod roots;
pub mod sink;
pub mod unit;

#[cfg(test)]
pub(crate) mod test_support;

pub use compile::{INDEX_IDENTITY, SchemaCompiler, build, compile, generate, write_units};
pub use config::{CompileOptions, ConfigError};
pub use descriptor::{DescriptorCompiler, build_descriptor_file};
pub use error::Error;
pub use generator::Generator;
pub use protolens_paths::CORE_CRATE_ENV;
pub use roots::compute_roots;
pub use sink::{DirSink, MemorySink, UnitSink};
pub use unit::{GeneratedUnit, ModuleKind};
