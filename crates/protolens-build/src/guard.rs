//! Type guard table: schema field type → runtime value predicate.

use proc_macro2::TokenStream;
use protolens_core::guard::Guard;
use protolens_schema::types::{FieldType, Occurrence, ScalarKind};
use quote::quote;

/// Guard for a field as declared. Repeated fields only require a sequence;
/// element types are not inspected.
#[must_use]
pub fn guard_for(ty: &FieldType, occurrence: Occurrence) -> Guard<'_> {
    if occurrence.is_repeated() {
        return Guard::Sequence;
    }

    match ty {
        FieldType::Scalar(kind) => scalar_guard(*kind),
        FieldType::Enum(_) => Guard::Symbol,
        FieldType::Message(name) => Guard::Message(name.as_str()),
    }
}

/// Guard for one element of a field, i.e. with `repeated` stripped.
#[must_use]
pub fn element_guard(ty: &FieldType) -> Guard<'_> {
    guard_for(ty, Occurrence::Optional)
}

const fn scalar_guard(kind: ScalarKind) -> Guard<'static> {
    match kind {
        ScalarKind::Bool => Guard::Bool,
        ScalarKind::Bytes => Guard::Bytes,
        ScalarKind::Double | ScalarKind::Float => Guard::Float,
        ScalarKind::String => Guard::Text,
        ScalarKind::Fixed32 | ScalarKind::Fixed64 | ScalarKind::Uint32 | ScalarKind::Uint64 => {
            Guard::Unsigned
        }
        ScalarKind::Int32
        | ScalarKind::Int64
        | ScalarKind::Sfixed32
        | ScalarKind::Sfixed64
        | ScalarKind::Sint32
        | ScalarKind::Sint64 => Guard::Integer,
    }
}

// Guard as a constant expression in generated code.
pub(crate) fn guard_tokens(guard: Guard<'_>, core: &TokenStream) -> TokenStream {
    let path = quote!(#core::guard::Guard);

    match guard {
        Guard::Sequence => quote!(#path::Sequence),
        Guard::Integer => quote!(#path::Integer),
        Guard::Unsigned => quote!(#path::Unsigned),
        Guard::Bool => quote!(#path::Bool),
        Guard::Float => quote!(#path::Float),
        Guard::Text => quote!(#path::Text),
        Guard::Bytes => quote!(#path::Bytes),
        Guard::Symbol => quote!(#path::Symbol),
        Guard::Message(name) => quote!(#path::Message(#name)),
    }
}

///
/// TESTS
///
