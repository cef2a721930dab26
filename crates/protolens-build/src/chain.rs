//! Path flattening: one `FieldChain` per accessor on a root module.

use crate::{
    classify::{Classifier, Edge},
    guard::{element_guard, guard_for},
    unit::{AccessorOp, ModuleKind},
};
use protolens_core::lens::{Step, Terminal};
use protolens_schema::{
    err,
    error::ErrorTree,
    node::{Field, MessageDef, QualifiedName},
};
use std::collections::BTreeMap;

///
/// ChainLink
/// A field together with the message type that declares it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChainLink<'g> {
    pub owner: &'g QualifiedName,
    pub field: &'g Field,
}

///
/// FieldChain
///
/// Root-first fields of one accessor path. Every link but the last is an
/// inlined, non-repeated message field; the last is the terminal.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldChain<'g> {
    links: Vec<ChainLink<'g>>,
}

impl<'g> FieldChain<'g> {
    fn new(ancestors: &[ChainLink<'g>], terminal: ChainLink<'g>) -> Self {
        let mut links = ancestors.to_vec();
        links.push(terminal);

        Self { links }
    }

    #[must_use]
    pub fn links(&self) -> &[ChainLink<'g>] {
        &self.links
    }

    #[must_use]
    pub fn ancestors(&self) -> &[ChainLink<'g>] {
        &self.links[..self.links.len() - 1]
    }

    #[must_use]
    pub fn terminal(&self) -> ChainLink<'g> {
        self.links[self.links.len() - 1]
    }

    /// Field names joined by `_`, root to leaf.
    #[must_use]
    pub fn accessor_path(&self) -> String {
        self.links
            .iter()
            .map(|link| link.field.name.as_str())
            .collect::<Vec<_>>()
            .join("_")
    }

    #[must_use]
    pub fn ops(&self) -> &'static [AccessorOp] {
        if self.terminal().field.is_repeated() {
            &[AccessorOp::Get, AccessorOp::Set, AccessorOp::Add]
        } else {
            &[AccessorOp::Get, AccessorOp::Set]
        }
    }

    /// Lens steps for the inlined ancestors.
    #[must_use]
    pub fn steps(&self) -> Vec<Step<'g>> {
        self.ancestors()
            .iter()
            .filter_map(|link| {
                let message = link.field.message_type()?;
                Some(Step::new(link.field.name.as_str(), message.as_str()))
            })
            .collect()
    }

    /// Lens terminal: the declared guard, plus the element guard when repeated.
    #[must_use]
    pub fn lens_terminal(&self) -> Terminal<'g> {
        let field = self.terminal().field;
        let element = field.is_repeated().then(|| element_guard(&field.ty));

        Terminal::new(
            field.name.as_str(),
            guard_for(&field.ty, field.occurrence),
            element,
        )
    }

    /// Reference back to the originating definitions, root to leaf.
    #[must_use]
    pub fn origin(&self) -> String {
        let terminal = self.terminal();
        let mut via = self
            .ancestors()
            .iter()
            .map(|link| format!("{}.{}", link.owner, link.field.name))
            .collect::<Vec<_>>();
        via.push(terminal.field.describe(terminal.owner));

        via.join(" -> ")
    }
}

///
/// Flattened
///
/// Chains for one module plus the modules the walk asked for.
///

#[derive(Debug, Default)]
pub struct Flattened<'g> {
    pub chains: Vec<FieldChain<'g>>,
    pub requests: Vec<(&'g QualifiedName, ModuleKind)>,
}

impl Flattened<'_> {
    /// Accessor paths must stay distinct after upper-casing: each one names
    /// the accessor functions and a `STEPS_*`/`LENS_*` const pair.
    pub fn validate_accessor_paths(&self, errs: &mut ErrorTree) {
        let mut seen = BTreeMap::new();

        for chain in &self.chains {
            let path = chain.accessor_path();
            if let Some(prev) = seen.insert(path.to_uppercase(), chain) {
                err!(
                    errs,
                    "accessor path '{path}' of {} collides with '{}' of {}",
                    chain.origin(),
                    prev.accessor_path(),
                    prev.origin()
                );
            }
        }
    }
}

/// Flatten `root`'s fields into accessor chains.
#[must_use]
pub fn flatten<'g>(classifier: &Classifier<'g>, root: &'g MessageDef) -> Flattened<'g> {
    let mut out = Flattened::default();
    let mut ancestors = Vec::new();
    walk(classifier, root, &mut ancestors, &mut out);

    out
}

// `ancestors` is a stack: innermost ancestor on top.
fn walk<'g>(
    classifier: &Classifier<'g>,
    owner: &'g MessageDef,
    ancestors: &mut Vec<ChainLink<'g>>,
    out: &mut Flattened<'g>,
) {
    for field in &owner.fields {
        let link = ChainLink {
            owner: &owner.name,
            field,
        };

        match classifier.edge(&owner.name, field) {
            Edge::Inline(ty) => {
                let Some(child) = classifier.graph().get(ty.as_str()) else {
                    continue;
                };
                ancestors.push(link);
                walk(classifier, child, ancestors, out);
                ancestors.pop();
            }
            Edge::OpaqueRepeated(ty) => {
                request(classifier, ty, ModuleKind::RepeatedTarget, out);
                terminate(ancestors, link, out);
            }
            Edge::OpaqueSingle(ty) => {
                request(classifier, ty, ModuleKind::Opaque, out);
                terminate(ancestors, link, out);
            }
            Edge::Terminal => terminate(ancestors, link, out),
        }
    }
}

// Circular targets already have a root module; undefined ones get none.
fn request<'g>(
    classifier: &Classifier<'g>,
    ty: &'g QualifiedName,
    kind: ModuleKind,
    out: &mut Flattened<'g>,
) {
    if !classifier.is_circular(ty) && classifier.graph().contains(ty.as_str()) {
        out.requests.push((ty, kind));
    }
}

fn terminate<'g>(ancestors: &[ChainLink<'g>], terminal: ChainLink<'g>, out: &mut Flattened<'g>) {
    let chain = FieldChain::new(ancestors, terminal);
    tracing::trace!(path = %chain.accessor_path(), "flattened chain");

    out.chains.push(chain);
}

///
/// TESTS
///
