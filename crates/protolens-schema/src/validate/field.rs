use crate::{MAX_FIELD_NUMBER, err, error::ErrorTree, node::MessageDef, validate::naming};
use std::collections::BTreeMap;

/// Field names (ignoring ASCII case) and numbers must be unique within a
/// message; numbers must be in `1..=MAX_FIELD_NUMBER`.
pub fn validate_fields(def: &MessageDef, errs: &mut ErrorTree) {
    let mut names = BTreeMap::new();
    let mut numbers = BTreeMap::new();

    for field in &def.fields {
        if let Err(e) = naming::validate_ident(&field.name) {
            errs.add_for(&field.name, e);
        }

        if field.number == 0 || field.number > MAX_FIELD_NUMBER {
            errs.add_for(
                &field.name,
                format!(
                    "field number {} is outside 1..={MAX_FIELD_NUMBER}",
                    field.number
                ),
            );
        }

        if names
            .insert(field.name.to_ascii_lowercase(), field.number)
            .is_some()
        {
            err!(errs, "duplicate field name '{}'", field.name);
        }

        if let Some(prev) = numbers.insert(field.number, field.name.as_str()) {
            err!(
                errs,
                "field number {} is used by both '{prev}' and '{}'",
                field.number,
                field.name
            );
        }
    }
}

///
/// TESTS
///
