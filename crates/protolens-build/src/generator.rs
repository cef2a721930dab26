use crate::{
    chain::flatten,
    classify::Classifier,
    emit::emit_module,
    roots::resolve_roots,
    unit::{GeneratedUnit, ModuleRecords},
};
use protolens_paths::CratePaths;
use protolens_schema::{error::ErrorTree, node::DefinitionGraph};

///
/// Generator
///
/// One generation pass over an immutable graph. Roots are requested first,
/// then every module the flattener asks for is emitted from a worklist.
/// The records live on the generator, so independent passes never share
/// state.
///

pub struct Generator<'g> {
    classifier: Classifier<'g>,
    paths: CratePaths,
    records: ModuleRecords,
}

impl<'g> Generator<'g> {
    #[must_use]
    pub fn new(graph: &'g DefinitionGraph) -> Self {
        Self::with_paths(graph, CratePaths::new())
    }

    #[must_use]
    pub fn with_paths(graph: &'g DefinitionGraph, paths: CratePaths) -> Self {
        Self {
            classifier: Classifier::new(graph),
            paths,
            records: ModuleRecords::new(),
        }
    }

    #[must_use]
    pub const fn records(&self) -> &ModuleRecords {
        &self.records
    }

    /// Emit every requested module. Output order is request order, which is
    /// fixed by definition order and field order. Accessor path collisions
    /// are collected across all modules and fail the pass.
    pub fn run(&mut self) -> Result<Vec<GeneratedUnit>, ErrorTree> {
        for (ty, kind) in resolve_roots(&self.classifier) {
            self.records.request(ty, kind);
        }

        let graph = self.classifier.graph();
        let mut units = Vec::new();
        let mut errors = ErrorTree::new();

        while let Some(ty) = self.records.next_pending() {
            let Some(def) = graph.get(ty.as_str()) else {
                continue;
            };
            let Some(record) = self.records.mark_emitted(&ty) else {
                continue;
            };
            let kind = record.kind;

            let flattened = flatten(&self.classifier, def);
            let mut errs = ErrorTree::new();
            flattened.validate_accessor_paths(&mut errs);
            errors.merge_for(ty.as_str(), errs);

            for (target, kind) in &flattened.requests {
                if self.records.request(target, *kind) {
                    tracing::trace!(ty = %target, %kind, from = %ty, "requested module");
                }
            }

            units.push(emit_module(&self.paths, def, kind, &flattened.chains));
        }

        tracing::info!(
            definitions = graph.len(),
            modules = units.len(),
            "generation pass complete"
        );

        errors.result()?;

        Ok(units)
    }
}

///
/// TESTS
///
