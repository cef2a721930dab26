//! Tree/cycle classification of message-to-message edges.
//!
//! A non-repeated message field is inlined into its owner's accessors only
//! when the target is declared lexically inside the owner and is not a
//! circular join-point. Everything else is an opaque boundary.

use protolens_schema::{
    node::{DefinitionGraph, Field, QualifiedName},
    types::FieldType,
};
use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet},
};

/// True iff each name is lexically nested in its predecessor and no name
/// repeats. A single-element path is trivially a tree edge.
pub fn is_tree_edge<N: Borrow<QualifiedName>>(path: &[N]) -> bool {
    let distinct = path.iter().enumerate().all(|(i, name)| {
        path[i + 1..]
            .iter()
            .all(|other| other.borrow() != name.borrow())
    });

    distinct
        && path
            .windows(2)
            .all(|pair| pair[1].borrow().is_nested_in(pair[0].borrow()))
}

/// True iff `ty` is the node at which some reference cycle back to `ty` must
/// be broken: a field walk from `ty` reaches `ty` again through a path that
/// is a direct self-reference or is not a pure nesting chain.
pub fn is_circular(ty: &QualifiedName, graph: &DefinitionGraph) -> bool {
    Components::new(graph).is_circular(graph, ty)
}

///
/// Components
///
/// Strongly connected components of the message reference graph (Tarjan).
/// Only members of a cyclic component can return to themselves, and every
/// such return stays inside the component.
///

struct Components<'g> {
    position: BTreeMap<&'g QualifiedName, usize>,
    component: Vec<usize>,
    cyclic: Vec<bool>,
}

impl<'g> Components<'g> {
    fn new(graph: &'g DefinitionGraph) -> Self {
        let names: Vec<_> = graph.names().collect();
        let position: BTreeMap<_, _> = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let edges: Vec<Vec<usize>> = graph
            .iter()
            .map(|def| {
                def.message_fields()
                    .filter_map(|(_, target)| position.get(target).copied())
                    .collect()
            })
            .collect();

        let mut tarjan = Tarjan::new(&edges);
        for node in 0..edges.len() {
            if tarjan.index[node].is_none() {
                tarjan.visit(node);
            }
        }

        let cyclic = tarjan
            .sizes
            .iter()
            .enumerate()
            .map(|(c, size)| {
                *size > 1
                    || edges
                        .iter()
                        .enumerate()
                        .any(|(node, out)| tarjan.component[node] == c && out.contains(&node))
            })
            .collect();

        Self {
            position,
            component: tarjan.component,
            cyclic,
        }
    }

    fn component_of(&self, name: &QualifiedName) -> Option<usize> {
        self.position.get(name).map(|&node| self.component[node])
    }

    fn is_circular(&self, graph: &'g DefinitionGraph, ty: &QualifiedName) -> bool {
        let Some((&origin, &node)) = self.position.get_key_value(ty) else {
            return false;
        };
        let component = self.component[node];
        if !self.cyclic[component] {
            return false;
        }

        let mut path = vec![origin];
        self.returns_to_origin(graph, component, &mut path)
    }

    // Depth-first over message-typed fields of the last node on `path`,
    // restricted to edges inside the origin's component.
    fn returns_to_origin(
        &self,
        graph: &'g DefinitionGraph,
        component: usize,
        path: &mut Vec<&'g QualifiedName>,
    ) -> bool {
        let (Some(&origin), Some(current)) = (path.first(), path.last()) else {
            return false;
        };
        let Some(def) = graph.get(current.as_str()) else {
            return false;
        };

        for (_, target) in def.message_fields() {
            if self.component_of(target) != Some(component) {
                continue;
            }
            if path.contains(&target) {
                if target == origin && (path.len() == 1 || !is_tree_edge(path.as_slice())) {
                    return true;
                }
                continue;
            }

            path.push(target);
            let found = self.returns_to_origin(graph, component, path);
            path.pop();

            if found {
                return true;
            }
        }

        false
    }
}

// Recursive Tarjan over adjacency lists; components are numbered in
// completion order.
struct Tarjan<'a> {
    edges: &'a [Vec<usize>],
    next: usize,
    index: Vec<Option<usize>>,
    low: Vec<usize>,
    stack: Vec<usize>,
    on_stack: Vec<bool>,
    component: Vec<usize>,
    sizes: Vec<usize>,
}

impl<'a> Tarjan<'a> {
    fn new(edges: &'a [Vec<usize>]) -> Self {
        let n = edges.len();

        Self {
            edges,
            next: 0,
            index: vec![None; n],
            low: vec![0; n],
            stack: Vec::new(),
            on_stack: vec![false; n],
            component: vec![0; n],
            sizes: Vec::new(),
        }
    }

    fn visit(&mut self, node: usize) {
        let id = self.next;
        self.next += 1;
        self.index[node] = Some(id);
        self.low[node] = id;
        self.stack.push(node);
        self.on_stack[node] = true;

        let edges = self.edges;
        for &target in &edges[node] {
            match self.index[target] {
                None => {
                    self.visit(target);
                    self.low[node] = self.low[node].min(self.low[target]);
                }
                Some(target_id) if self.on_stack[target] => {
                    self.low[node] = self.low[node].min(target_id);
                }
                Some(_) => {}
            }
        }

        if self.low[node] == id {
            let component = self.sizes.len();
            let mut size = 0;
            while let Some(member) = self.stack.pop() {
                self.on_stack[member] = false;
                self.component[member] = component;
                size += 1;
                if member == node {
                    break;
                }
            }
            self.sizes.push(size);
        }
    }
}

///
/// Edge
///
/// Classification of one field of a message. `Terminal` covers scalar and
/// enum fields, singular or repeated.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Edge<'g> {
    Inline(&'g QualifiedName),
    OpaqueSingle(&'g QualifiedName),
    OpaqueRepeated(&'g QualifiedName),
    Terminal,
}

///
/// Classifier
///
/// Per-pass classifier with the circular set computed once up front.
///

pub struct Classifier<'g> {
    graph: &'g DefinitionGraph,
    circular: BTreeSet<&'g QualifiedName>,
}

impl<'g> Classifier<'g> {
    #[must_use]
    pub fn new(graph: &'g DefinitionGraph) -> Self {
        let components = Components::new(graph);
        let circular = graph
            .names()
            .filter(|name| components.is_circular(graph, name))
            .collect::<BTreeSet<_>>();

        tracing::trace!(circular = circular.len(), "classified definition graph");

        Self { graph, circular }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g DefinitionGraph {
        self.graph
    }

    #[must_use]
    pub fn is_circular(&self, ty: &QualifiedName) -> bool {
        self.circular.contains(ty)
    }

    /// Circular join-points in definition order.
    pub fn circular(&self) -> impl Iterator<Item = &'g QualifiedName> + '_ {
        self.graph
            .names()
            .filter(|name| self.circular.contains(name))
    }

    /// Inline iff the target exists, is not circular and is nested in `base`.
    #[must_use]
    pub fn is_inlineable(&self, base: &QualifiedName, ty: &QualifiedName) -> bool {
        self.graph.contains(ty.as_str()) && !self.is_circular(ty) && is_tree_edge(&[base, ty])
    }

    #[must_use]
    pub fn edge(&self, base: &QualifiedName, field: &'g Field) -> Edge<'g> {
        match &field.ty {
            FieldType::Message(ty) if field.is_repeated() => Edge::OpaqueRepeated(ty),
            FieldType::Message(ty) if self.is_inlineable(base, ty) => Edge::Inline(ty),
            FieldType::Message(ty) => Edge::OpaqueSingle(ty),
            FieldType::Scalar(_) | FieldType::Enum(_) => Edge::Terminal,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{graph, message, msg, one, repeated, scalar};
    use protolens_schema::node::MessageDef;
    use proptest::prelude::*;

    fn name(s: &str) -> QualifiedName {
        QualifiedName::from(s)
    }

    // ---- is_tree_edge -------------------------------------------------

    #[test]
    fn nesting_chains_are_tree_edges() {
        assert!(is_tree_edge(&[name("A")]));
        assert!(is_tree_edge(&[name("A"), name("A.B")]));
        assert!(is_tree_edge(&[name("A"), name("A.B"), name("A.B.C")]));
        assert!(is_tree_edge(&[name("A"), name("A.B.C")]));
    }

    #[test]
    fn non_nested_or_repeating_paths_are_not_tree_edges() {
        assert!(!is_tree_edge(&[name("Person"), name("Address")]));
        assert!(!is_tree_edge(&[name("A.B"), name("A")]));
        assert!(!is_tree_edge(&[name("A"), name("A")]));
        assert!(!is_tree_edge(&[name("A"), name("AB")]));
    }

    fn arb_name() -> impl Strategy<Value = QualifiedName> {
        proptest::collection::vec(prop_oneof![Just("A"), Just("B"), Just("C")], 1..4)
            .prop_map(|segments| QualifiedName::new(segments.join(".")))
    }

    proptest! {
        #[test]
        fn single_element_is_always_a_tree_edge(n in arb_name()) {
            prop_assert!(is_tree_edge(&[n]));
        }

        #[test]
        fn repeats_are_never_tree_edges(
            mut path in proptest::collection::vec(arb_name(), 1..5),
            pick in any::<prop::sample::Index>(),
        ) {
            let dup = path[pick.index(path.len())].clone();
            path.push(dup);
            prop_assert!(!is_tree_edge(&path));
        }
    }

    // ---- is_circular --------------------------------------------------

    #[test]
    fn self_reference_is_circular() {
        let g = graph([message("Node", [repeated("children", msg("Node"), 1)])]);

        assert!(is_circular(&name("Node"), &g));
    }

    #[test]
    fn singular_self_reference_is_circular() {
        let g = graph([message("List", [one("next", msg("List"), 1)])]);

        assert!(is_circular(&name("List"), &g));
    }

    #[test]
    fn acyclic_graph_has_no_join_points() {
        let g = graph([
            message("Person", [one("address", msg("Address"), 1)]),
            message("Address", [one("street", scalar("string"), 1)]),
            message("Company", [repeated("staff", msg("Person"), 1)]),
        ]);

        for n in g.names() {
            assert!(!is_circular(n, &g), "{n}");
        }
    }

    #[test]
    fn mutual_recursion_flags_both_members() {
        let g = graph([
            message("A", [one("b", msg("B"), 1)]),
            message("B", [one("a", msg("A"), 1)]),
        ]);

        assert!(is_circular(&name("A"), &g));
        assert!(is_circular(&name("B"), &g));
    }

    #[test]
    fn back_reference_from_nested_child_is_broken_at_the_child() {
        // A -> A.B (nesting) -> A (back up): the cycle returns to A through a
        // pure nesting chain, so the join-point is A.B, not A.
        let g = graph([
            message("A", [one("b", msg("A.B"), 1)]),
            message("A.B", [one("parent", msg("A"), 1)]),
        ]);

        assert!(!is_circular(&name("A"), &g));
        assert!(is_circular(&name("A.B"), &g));
    }

    #[test]
    fn cycle_not_through_origin_does_not_flag_origin() {
        let g = graph([
            message("Root", [one("x", msg("X"), 1)]),
            message("X", [one("y", msg("Y"), 1)]),
            message("Y", [one("x", msg("X"), 1)]),
        ]);

        assert!(!is_circular(&name("Root"), &g));
        assert!(is_circular(&name("X"), &g));
        assert!(is_circular(&name("Y"), &g));
    }

    #[test]
    fn undefined_targets_are_skipped() {
        let g = graph([message("A", [one("ghost", msg("Ghost"), 1)])]);

        assert!(!is_circular(&name("A"), &g));
    }

    // Mi has two fields both typed M{i+1}; the last level is `tail`.
    fn diamond_chain(depth: usize, tail: Vec<Field>) -> DefinitionGraph {
        let mut defs: Vec<_> = (0..depth)
            .map(|i| {
                let next = format!("M{}", i + 1);
                MessageDef::new(
                    format!("M{i}"),
                    vec![one("a", msg(&next), 1), one("b", msg(&next), 2)],
                )
            })
            .collect();
        defs.push(MessageDef::new(format!("M{depth}"), tail));

        DefinitionGraph::from_defs(defs).unwrap()
    }

    #[test]
    fn deep_acyclic_diamonds_have_no_join_points() {
        let g = diamond_chain(64, vec![one("leaf", scalar("string"), 1)]);
        let classifier = Classifier::new(&g);

        assert_eq!(classifier.circular().count(), 0);
    }

    #[test]
    fn cycle_behind_deep_diamonds_flags_only_its_members() {
        let g = diamond_chain(64, vec![one("next", msg("M64"), 1)]);
        let classifier = Classifier::new(&g);

        assert_eq!(
            classifier.circular().map(QualifiedName::as_str).collect::<Vec<_>>(),
            ["M64"]
        );
        assert!(is_circular(&name("M64"), &g));
        assert!(!is_circular(&name("M0"), &g));
    }

    // ---- edges --------------------------------------------------------

    #[test]
    fn four_way_edge_classification() {
        let g = graph([
            message(
                "Person",
                [
                    one("name", scalar("string"), 1),
                    one("home", msg("Person.Address"), 2),
                    one("work", msg("Address"), 3),
                    repeated("past", msg("Person.Address"), 4),
                    repeated("tags", scalar("string"), 5),
                ],
            ),
            message("Person.Address", [one("street", scalar("string"), 1)]),
            message("Address", [one("street", scalar("string"), 1)]),
        ]);
        let classifier = Classifier::new(&g);
        let person = g.get("Person").unwrap();
        let edges: Vec<_> = person
            .fields
            .iter()
            .map(|field| classifier.edge(&person.name, field))
            .collect();

        assert_eq!(
            edges,
            [
                Edge::Terminal,
                Edge::Inline(&name("Person.Address")),
                Edge::OpaqueSingle(&name("Address")),
                Edge::OpaqueRepeated(&name("Person.Address")),
                Edge::Terminal,
            ]
        );
    }

    #[test]
    fn circular_nested_child_is_opaque() {
        let g = graph([
            message("Tree", [one("root", msg("Tree.Node"), 1)]),
            message("Tree.Node", [one("next", msg("Tree.Node"), 1)]),
        ]);
        let classifier = Classifier::new(&g);
        let tree = g.get("Tree").unwrap();

        assert_eq!(
            classifier.edge(&tree.name, &tree.fields[0]),
            Edge::OpaqueSingle(&name("Tree.Node"))
        );
        assert_eq!(
            classifier.circular().map(QualifiedName::as_str).collect::<Vec<_>>(),
            ["Tree.Node"]
        );
    }
}
