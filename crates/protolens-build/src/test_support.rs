//! Graph builders and shared fixtures for unit tests.

use protolens_schema::{
    node::{DefinitionGraph, Field, MessageDef},
    types::{FieldType, Occurrence, ScalarKind},
};

pub(crate) fn graph<const N: usize>(defs: [MessageDef; N]) -> DefinitionGraph {
    DefinitionGraph::from_defs(defs).expect("fixture graph has unique names")
}

pub(crate) fn message<const N: usize>(name: &str, fields: [Field; N]) -> MessageDef {
    MessageDef::new(name, fields.into())
}

pub(crate) fn one(name: &str, ty: FieldType, number: u32) -> Field {
    Field::new(name, ty, Occurrence::Optional, number)
}

pub(crate) fn required(name: &str, ty: FieldType, number: u32) -> Field {
    Field::new(name, ty, Occurrence::Required, number)
}

pub(crate) fn repeated(name: &str, ty: FieldType, number: u32) -> Field {
    Field::new(name, ty, Occurrence::Repeated, number)
}

pub(crate) fn msg(name: &str) -> FieldType {
    FieldType::message(name)
}

pub(crate) fn enumeration(name: &str) -> FieldType {
    FieldType::enumeration(name)
}

pub(crate) fn scalar(kind: &str) -> FieldType {
    FieldType::Scalar(kind.parse::<ScalarKind>().expect("fixture scalar kind"))
}

/// `{Address, Person(address), Job, Company(jobs: repeated Job)}`
pub(crate) fn canonical() -> DefinitionGraph {
    graph([
        message("Address", []),
        message("Person", [one("address", msg("Address"), 1)]),
        message("Job", []),
        message("Company", [repeated("jobs", msg("Job"), 1)]),
    ])
}

/// Nested person schema exercising inline, opaque and repeated edges.
pub(crate) fn person() -> DefinitionGraph {
    graph([
        message(
            "Person",
            [
                required("name", scalar("string"), 1),
                one("address", msg("Person.Address"), 2),
                one("employer", msg("Company"), 3),
                repeated("tags", scalar("string"), 4),
                one("mood", enumeration("Person.Mood"), 5),
            ],
        ),
        message(
            "Person.Address",
            [
                one("street", scalar("string"), 1),
                one("zip", scalar("uint32"), 2),
                one("geo", msg("Person.Address.Geo"), 3),
            ],
        ),
        message(
            "Person.Address.Geo",
            [one("lat", scalar("double"), 1), one("lng", scalar("double"), 2)],
        ),
        message(
            "Company",
            [
                one("name", scalar("string"), 1),
                repeated("jobs", msg("Company.Job"), 2),
            ],
        ),
        message(
            "Company.Job",
            [
                one("title", scalar("string"), 1),
                one("salary", scalar("int64"), 2),
            ],
        ),
    ])
}
