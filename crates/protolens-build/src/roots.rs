//! Root resolution: the minimal set of message types that need a module of
//! their own before any on-demand (opaque / repeated-target) requests.

use crate::{
    classify::{Classifier, Edge},
    unit::ModuleKind,
};
use protolens_schema::node::{DefinitionGraph, QualifiedName};
use std::collections::BTreeSet;

/// Roots in definition order: base roots first, then circular join-points
/// that the reduction removed. Circular roots are tagged `CycleJoin`.
///
/// The reduction reads the fields of every definition, not only of those
/// still under consideration: a type already removed as an inlined child
/// still removes its own inlined children, so the result does not depend
/// on the order in which definitions are visited.
#[must_use]
pub fn resolve_roots<'g>(classifier: &Classifier<'g>) -> Vec<(&'g QualifiedName, ModuleKind)> {
    let graph = classifier.graph();
    let mut candidates = graph.names().collect::<BTreeSet<_>>();

    // A type removed as somebody's inlined child still contributes its own
    // edges: its nested children are reached through it.
    for def in graph.iter() {
        if def.is_empty() {
            candidates.remove(&def.name);
            continue;
        }

        for field in &def.fields {
            if let Edge::Inline(ty) = classifier.edge(&def.name, field) {
                candidates.remove(ty);
            }
        }
    }

    let mut roots = graph
        .names()
        .filter(|name| candidates.contains(name))
        .map(|name| {
            let kind = if classifier.is_circular(name) {
                ModuleKind::CycleJoin
            } else {
                ModuleKind::Root
            };
            (name, kind)
        })
        .collect::<Vec<_>>();

    roots.extend(
        classifier
            .circular()
            .filter(|name| !candidates.contains(name))
            .map(|name| (name, ModuleKind::CycleJoin)),
    );

    for (name, kind) in &roots {
        tracing::trace!(ty = %name, %kind, "resolved root");
    }

    roots
}

/// Names of the root types for `graph`.
#[must_use]
pub fn compute_roots(graph: &DefinitionGraph) -> Vec<QualifiedName> {
    let classifier = Classifier::new(graph);

    resolve_roots(&classifier)
        .into_iter()
        .map(|(name, _)| name.clone())
        .collect()
}

///
/// TESTS
///
