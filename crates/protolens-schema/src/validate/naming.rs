use crate::{
    MAX_IDENT_LEN, err,
    error::ErrorTree,
    node::{DefinitionGraph, MessageDef},
};
use std::collections::BTreeMap;

/// Rust keywords; a module identity may not be one of them.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Ensure an identifier is usable as part of a generated Rust item name.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return Err("ident is empty".to_string());
    };

    if ident.len() > MAX_IDENT_LEN {
        return Err(format!(
            "ident '{ident}' exceeds max length {MAX_IDENT_LEN}"
        ));
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!("ident '{ident}' must start with a letter or '_'"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("ident '{ident}' must be ASCII alphanumeric or '_'"));
    }

    Ok(())
}

/// Message name segments must be identifiers that start with a letter.
pub fn validate_message_name(def: &MessageDef, errs: &mut ErrorTree) {
    for segment in def.name.segments() {
        if let Err(e) = validate_ident(segment) {
            errs.add(e);
        } else if segment.starts_with('_') {
            err!(errs, "name segment '{segment}' must start with a letter");
        }
    }
}

/// Distinct types must not collapse onto the same module identity
/// (`A.B` and `A_B`, or names differing only in case), and no identity may
/// be a reserved word.
pub fn validate_module_identities(graph: &DefinitionGraph, errs: &mut ErrorTree) {
    let mut seen = BTreeMap::new();

    for name in graph.names() {
        let identity = name.module_identity();
        if RESERVED.contains(&identity.as_str()) {
            err!(errs, "module identity '{identity}' of '{name}' is a reserved word");
        }
        if let Some(prev) = seen.insert(identity.clone(), name) {
            err!(
                errs,
                "module identity '{identity}' is shared by '{prev}' and '{name}'"
            );
        }
    }
}

///
/// TESTS
///
