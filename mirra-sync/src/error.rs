//! Error types for mirra-sync.

use std::path::PathBuf;

use thiserror::Error;

use mirra_core::{FingerprintError, MapError};

/// All errors that can arise from detection or mutation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file copy failed. Both endpoints are named: the fault may sit on
    /// either side (vanished source, full or unwritable replica).
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be mapped between the roots.
    #[error(transparent)]
    Map(#[from] MapError),

    /// A file could not be hashed for comparison.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Copy`].
pub(crate) fn copy_err(
    from: impl Into<PathBuf>,
    to: impl Into<PathBuf>,
    source: std::io::Error,
) -> SyncError {
    SyncError::Copy {
        from: from.into(),
        to: to.into(),
        source,
    }
}
