//! Path mapping between the source and replica roots.
//!
//! Mapping is root-relative arithmetic: strip the expected root prefix, then
//! rejoin the remainder onto the other root. Whole-string substitution is
//! deliberately avoided — a root named `data` must not rewrite a `metadata`
//! segment deeper in the path.

use std::path::{Path, PathBuf};

use crate::error::MapError;

/// Translates absolute paths under one root into paths under the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    source_root: PathBuf,
    replica_root: PathBuf,
}

impl PathMapper {
    pub fn new(source_root: impl Into<PathBuf>, replica_root: impl Into<PathBuf>) -> Self {
        PathMapper {
            source_root: source_root.into(),
            replica_root: replica_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn replica_root(&self) -> &Path {
        &self.replica_root
    }

    /// Map a path under the source root to its replica counterpart.
    pub fn to_replica(&self, path: &Path) -> Result<PathBuf, MapError> {
        remap(path, &self.source_root, &self.replica_root)
    }

    /// Map a path under the replica root to its source counterpart.
    pub fn to_source(&self, path: &Path) -> Result<PathBuf, MapError> {
        remap(path, &self.replica_root, &self.source_root)
    }
}

fn remap(path: &Path, from: &Path, to: &Path) -> Result<PathBuf, MapError> {
    let relative = path.strip_prefix(from).map_err(|_| MapError::NotUnderRoot {
        path: path.to_path_buf(),
        root: from.to_path_buf(),
    })?;
    Ok(to.join(relative))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
