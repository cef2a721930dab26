use crate::{
    config::CompileOptions,
    emit::emit_index,
    error::Error,
    generator::Generator,
    sink::UnitSink,
    unit::GeneratedUnit,
};
use protolens_paths::CratePaths;
use protolens_schema::{node::DefinitionGraph, validate::validate_graph};

/// Identity under which `build` writes the module index. Message names may
/// not start with `_`, so no unit can take it.
pub const INDEX_IDENTITY: &str = "__accessors";

///
/// SchemaCompiler
///
/// Turns schema source into a definition graph. Parsing is entirely the
/// implementor's business; options are handed over as given.
///

pub trait SchemaCompiler {
    type Error: std::error::Error + Send + Sync + 'static;

    fn compile(
        &self,
        source: &str,
        options: &CompileOptions,
    ) -> Result<DefinitionGraph, Self::Error>;
}

/// Run the schema compiler, passing its failure through as `SchemaCompile`.
pub fn compile<S: SchemaCompiler>(
    compiler: &S,
    source: &str,
    options: &CompileOptions,
) -> Result<DefinitionGraph, Error> {
    compiler
        .compile(source, options)
        .map_err(Error::schema_compile)
}

/// Validate `graph` and run one generation pass over it.
pub fn generate(graph: &DefinitionGraph) -> Result<Vec<GeneratedUnit>, Error> {
    generate_with(graph, CratePaths::new())
}

pub fn generate_with(
    graph: &DefinitionGraph,
    paths: CratePaths,
) -> Result<Vec<GeneratedUnit>, Error> {
    validate_graph(graph)?;

    Ok(Generator::with_paths(graph, paths).run()?)
}

/// Write every unit, then the index, to `sink`.
pub fn write_units(units: &[GeneratedUnit], sink: &mut impl UnitSink) -> Result<(), Error> {
    for unit in units {
        sink.write(&unit.identity, &unit.source)
            .map_err(|e| Error::destination(&unit.identity, e))?;
    }

    sink.write(INDEX_IDENTITY, &emit_index(units))
        .map_err(|e| Error::destination(INDEX_IDENTITY, e))
}

/// Compile, generate and write in one go.
pub fn build<S: SchemaCompiler>(
    compiler: &S,
    source: &str,
    options: &CompileOptions,
    sink: &mut impl UnitSink,
) -> Result<Vec<GeneratedUnit>, Error> {
    let graph = compile(compiler, source, options)?;
    let units = generate(&graph)?;
    write_units(&units, sink)?;

    Ok(units)
}

///
/// TESTS
///
