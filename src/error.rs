//! Error types for a preprocessing run.

use std::path::{Path, PathBuf};

use tracing::Level;

/// Why a run did not produce output.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    /// Input path does not exist
    #[error("input file {} not found", .path.display())]
    MissingInput { path: PathBuf },

    /// Input exists but holds only whitespace
    #[error("input file {} is empty", .path.display())]
    EmptyInput { path: PathBuf },

    /// Read, decode or write failure
    #[error("error processing news file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Classification of a [`PreprocessError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingInput,
    EmptyInput,
    IoFailure,
}

impl PreprocessError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingInput { .. } => FailureKind::MissingInput,
            Self::EmptyInput { .. } => FailureKind::EmptyInput,
            Self::Io { .. } => FailureKind::IoFailure,
        }
    }

    /// Path the failure relates to.
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingInput { path } | Self::EmptyInput { path } | Self::Io { path, .. } => {
                path.as_path()
            }
        }
    }

    /// Severity used when the failure is reported.
    pub fn level(&self) -> Level {
        match self.kind() {
            FailureKind::MissingInput | FailureKind::EmptyInput => Level::WARN,
            FailureKind::IoFailure => Level::ERROR,
        }
    }
}
