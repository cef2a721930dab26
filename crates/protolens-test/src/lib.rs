//! Accessors generated from `schema/directory.json`, exercised end to end.

protolens::include_accessors!();
