use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// CompileOptions
///
/// Forwarded verbatim to the schema compiler. Nothing here is interpreted
/// by the generator itself.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    /// Directories searched for schema sources and their imports.
    pub include_paths: Vec<PathBuf>,

    /// Where generated units should land; `None` means the caller decides.
    pub output_dir: Option<PathBuf>,

    /// Opaque flags for the compiler and codec runtime.
    pub codec_flags: BTreeMap<String, String>,
}

impl CompileOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    #[must_use]
    pub fn include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    #[must_use]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    #[must_use]
    pub fn codec_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.codec_flags.insert(key.into(), value.into());
        self
    }

    /// First include path holding `file`, or `file` itself when it is
    /// absolute or no include path matches.
    #[must_use]
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            return file.to_path_buf();
        }

        self.include_paths
            .iter()
            .map(|dir| dir.join(file))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| file.to_path_buf())
    }
}

///
/// TESTS
///
