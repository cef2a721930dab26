use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

// Crates that cannot depend on the `protolens` facade.
const INTERNAL_CRATES: &[&str] = &[
    "protolens-build",
    "protolens-core",
    "protolens-paths",
    "protolens-schema",
];

/// Env var overriding the runtime crate path used in generated code.
pub const CORE_CRATE_ENV: &str = "PROTOLENS_CORE_CRATE";

fn parse_path(value: &str) -> Option<TokenStream> {
    let path = syn::parse_str::<Path>(value.trim()).ok()?;

    Some(quote!(#path))
}

///
/// CratePaths
///
/// Runtime crate root referenced by generated accessor modules.
///

#[derive(Clone, Debug, Default)]
pub struct CratePaths {
    pub core: TokenStream,
}

impl CratePaths {
    /// Paths for the package being built (`CARGO_PKG_NAME`), unless
    /// `PROTOLENS_CORE_CRATE` holds a valid path.
    #[must_use]
    pub fn new() -> Self {
        let overridden = std::env::var(CORE_CRATE_ENV)
            .ok()
            .and_then(|value| Self::with_core(&value));

        overridden.unwrap_or_else(|| {
            Self::for_package(&std::env::var("CARGO_PKG_NAME").unwrap_or_default())
        })
    }

    /// Internal crates reach `::protolens_core` directly; any other package
    /// goes through the `::protolens::core` facade.
    #[must_use]
    pub fn for_package(package: &str) -> Self {
        let core = if INTERNAL_CRATES.contains(&package) {
            quote!(::protolens_core)
        } else {
            quote!(::protolens::core)
        };

        Self { core }
    }

    /// Explicit runtime path, e.g. `my_runtime::core`. `None` if it does not
    /// parse as a Rust path.
    #[must_use]
    pub fn with_core(path: &str) -> Option<Self> {
        parse_path(path).map(|core| Self { core })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn internal_crates_skip_the_facade() {
        assert_eq!(
            CratePaths::for_package("protolens-build").core.to_string(),
            quote!(::protolens_core).to_string()
        );
        assert_eq!(
            CratePaths::for_package("external-app").core.to_string(),
            quote!(::protolens::core).to_string()
        );
    }

    #[test]
    fn explicit_path_must_parse() {
        assert!(CratePaths::with_core("runtime::core").is_some());
        assert!(CratePaths::with_core("not a path").is_none());
    }

    // Only test in this crate that touches the process environment.
    #[test]
    fn env_override_applies_when_it_parses() {
        let prev = env::var(CORE_CRATE_ENV).ok();

        unsafe { env::set_var(CORE_CRATE_ENV, " custom::core ") };
        let custom = CratePaths::new();
        unsafe { env::set_var(CORE_CRATE_ENV, "not a path") };
        let fallback = CratePaths::new();

        unsafe {
            match prev {
                Some(value) => env::set_var(CORE_CRATE_ENV, value),
                None => env::remove_var(CORE_CRATE_ENV),
            }
        }

        assert_eq!(custom.core.to_string(), quote!(custom::core).to_string());
        let package = env::var("CARGO_PKG_NAME").unwrap_or_default();
        assert_eq!(
            fallback.core.to_string(),
            CratePaths::for_package(&package).core.to_string()
        );
    }
}
