//! Reference schema compiler over pre-parsed JSON descriptors.
//!
//! The descriptor is a serialised `DefinitionGraph`:
//!
//! ```json
//! { "messages": [
//!     { "name": "Company", "fields": [
//!         { "name": "jobs", "type": { "message": "Company.Job" },
//!           "occurrence": "repeated", "number": 1 } ] } ] }
//! ```

use crate::{
    compile::{SchemaCompiler, build},
    config::CompileOptions,
    error::Error,
    sink::UnitSink,
    unit::GeneratedUnit,
};
use protolens_schema::node::DefinitionGraph;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// DescriptorError
///

#[derive(Debug, ThisError)]
#[error("invalid descriptor: {0}")]
pub struct DescriptorError(#[from] serde_json::Error);

///
/// DescriptorCompiler
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptorCompiler;

impl SchemaCompiler for DescriptorCompiler {
    type Error = DescriptorError;

    fn compile(
        &self,
        source: &str,
        _options: &CompileOptions,
    ) -> Result<DefinitionGraph, Self::Error> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Read a descriptor file (resolved against the include paths) and build it
/// into `sink`.
pub fn build_descriptor_file(
    file: impl AsRef<Path>,
    options: &CompileOptions,
    sink: &mut impl UnitSink,
) -> Result<Vec<GeneratedUnit>, Error> {
    let path = options.resolve(file);
    let source = fs::read_to_string(&path).map_err(|source| Error::SourceUnavailable {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "read descriptor");

    build(&DescriptorCompiler, &source, options, sink)
}

///
/// TESTS
///
