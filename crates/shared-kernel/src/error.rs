// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SieveError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SieveError>,
    },

    #[error("{0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("{0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, SieveError>;

/// Filesystem-facing errors raised by the input and output adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("input file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read input file '{}': {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceRead { path, .. }
            | Self::OutputDir { path, .. }
            | Self::OutputWrite { path, .. } => path,
        }
    }

    /// Only a missing output directory stops the run; everything else is reported per file.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::OutputDir { .. })
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Command-line level errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("no input files")]
    NoInputFiles,

    #[error("configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SieveError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SieveError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
