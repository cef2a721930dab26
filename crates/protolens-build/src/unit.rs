use derive_more::Display;
use protolens_schema::node::QualifiedName;
use std::collections::{BTreeMap, VecDeque};

///
/// ModuleKind
/// Why a message type received its own module.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ModuleKind {
    #[display("root")]
    Root,
    #[display("opaque")]
    Opaque,
    #[display("repeated-target")]
    RepeatedTarget,
    #[display("cycle-join")]
    CycleJoin,
}

///
/// ModuleRecord
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleRecord {
    pub identity: String,
    pub kind: ModuleKind,
    pub emitted: bool,
}

///
/// ModuleRecords
///
/// Per-pass accumulator of requested modules. The first request for a type
/// creates its record and queues it; later requests are no-ops, which is
/// what keeps generation finite on cyclic graphs.
///

#[derive(Debug, Default)]
pub struct ModuleRecords {
    records: BTreeMap<QualifiedName, ModuleRecord>,
    pending: VecDeque<QualifiedName>,
}

impl ModuleRecords {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            pending: VecDeque::new(),
        }
    }

    /// Request a module for `ty`. Returns true if this created the record.
    pub fn request(&mut self, ty: &QualifiedName, kind: ModuleKind) -> bool {
        if self.records.contains_key(ty) {
            return false;
        }

        self.records.insert(
            ty.clone(),
            ModuleRecord {
                identity: ty.module_identity(),
                kind,
                emitted: false,
            },
        );
        self.pending.push_back(ty.clone());

        true
    }

    /// Next requested type that has not been emitted, in request order.
    pub fn next_pending(&mut self) -> Option<QualifiedName> {
        self.pending.pop_front()
    }

    /// Flip the record to emitted. `None` if the type was never requested
    /// or was already emitted.
    pub fn mark_emitted(&mut self, ty: &QualifiedName) -> Option<&ModuleRecord> {
        let record = self.records.get_mut(ty)?;
        if record.emitted {
            return None;
        }
        record.emitted = true;

        Some(record)
    }

    #[must_use]
    pub fn get(&self, ty: &QualifiedName) -> Option<&ModuleRecord> {
        self.records.get(ty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

///
/// AccessorOp
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessorOp {
    #[display("get")]
    Get,
    #[display("set")]
    Set,
    #[display("add")]
    Add,
}

///
/// Accessor
/// One generated accessor function and the field definition it came from.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Accessor {
    pub name: String,
    pub op: AccessorOp,
    pub origin: String,
}

///
/// GeneratedUnit
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedUnit {
    pub identity: String,
    pub type_name: QualifiedName,
    pub kind: ModuleKind,
    pub accessors: Vec<Accessor>,
    pub source: String,
}

impl GeneratedUnit {
    /// Accessor names in emission order.
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|accessor| accessor.name.as_str())
    }

    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|accessor| accessor.name == name)
    }
}

///
/// TESTS
///
