//! Error types for `champion-pack`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the champion packing pipeline.
#[derive(Debug, Error)]
pub enum PackError {
    /// The champion root directory does not exist.
    #[error("champion directory not found at {path}")]
    RootNotFound {
        /// Root directory that was requested.
        path: Utf8PathBuf,
    },

    /// A directory or champion file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The generated module could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// Destination path of the generated module.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The exported constant name is not a JavaScript identifier.
    #[error("export name '{0}' is not a valid JavaScript identifier")]
    InvalidExportName(String),

    /// An explicitly requested configuration file is missing.
    #[error("configuration file not found at {0}")]
    ConfigNotFound(Utf8PathBuf),

    /// Layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The champion mapping could not be serialised.
    #[error("failed to render champion module: {0}")]
    Render(#[from] serde_json::Error),
}

impl PackError {
    pub(crate) fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results produced by this crate.
pub type Result<T, E = PackError> = std::result::Result<T, E>;
