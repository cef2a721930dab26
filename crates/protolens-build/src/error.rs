use crate::config::ConfigError;
use protolens_schema::error::ErrorTree;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// Raised by the injected schema compiler; passed through untouched.
    #[error(transparent)]
    SchemaCompile(Box<dyn std::error::Error + Send + Sync>),

    #[error("cannot read schema source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write unit '{identity}': {source}")]
    DestinationUnavailable {
        identity: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid definition graph: {0}")]
    Validation(ErrorTree),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn schema_compile(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SchemaCompile(Box::new(err))
    }

    pub(crate) fn destination(identity: &str, source: io::Error) -> Self {
        Self::DestinationUnavailable {
            identity: identity.to_string(),
            source,
        }
    }
}

impl From<ErrorTree> for Error {
    fn from(errors: ErrorTree) -> Self {
        Self::Validation(errors)
    }
}
