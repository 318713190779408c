//! Error types for mirra-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from path mapping between the source and replica roots.
#[derive(Debug, Error)]
pub enum MapError {
    /// The input path does not begin with the expected root.
    #[error("path {path} is not under root {root}")]
    NotUnderRoot { path: PathBuf, root: PathBuf },
}

/// A file could not be opened or read while computing its content digest.
#[derive(Debug, Error)]
#[error("failed to fingerprint {path}: {source}")]
pub struct FingerprintError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Convenience constructor for [`FingerprintError`].
pub(crate) fn fp_err(path: impl Into<PathBuf>, source: std::io::Error) -> FingerprintError {
    FingerprintError {
        path: path.into(),
        source,
    }
}
