//! Domain types for the mirror engine.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Entities here are ephemeral: built during a pass's walk, consumed
//! by the mutator, discarded at pass end.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// The kind of a filesystem object discovered during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// A filesystem object discovered during a tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute path of the object.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Entry {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Entry {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The kind of a pending mutation, for reporting and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Create => write!(f, "create"),
            ActionKind::Update => write!(f, "update"),
            ActionKind::Delete => write!(f, "delete"),
        }
    }
}

/// A single planned mutation produced by change detection.
///
/// `Create` and `Update` carry the source entry plus the mapped destination
/// under the replica root; `Delete` carries the replica entry to remove.
/// A `Create` whose entry is a directory stands for the whole subtree: the
/// mutator copies it recursively in one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "action")]
pub enum SyncAction {
    Create { entry: Entry, dest: PathBuf },
    Update { entry: Entry, dest: PathBuf },
    Delete { entry: Entry },
}

impl SyncAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            SyncAction::Create { .. } => ActionKind::Create,
            SyncAction::Update { .. } => ActionKind::Update,
            SyncAction::Delete { .. } => ActionKind::Delete,
        }
    }

    /// The path this action reads from (copies) or removes (deletes).
    pub fn subject(&self) -> &PathBuf {
        match self {
            SyncAction::Create { entry, .. }
            | SyncAction::Update { entry, .. }
            | SyncAction::Delete { entry } => &entry.path,
        }
    }

    /// The path this action writes to, if it writes at all.
    pub fn dest(&self) -> Option<&PathBuf> {
        match self {
            SyncAction::Create { dest, .. } | SyncAction::Update { dest, .. } => Some(dest),
            SyncAction::Delete { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Fingerprints
// ---------------------------------------------------------------------------

/// An opaque digest of a file's full byte content, hex-encoded.
///
/// Equal fingerprints imply equal content up to digest collision probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub String);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_display() {
        assert_eq!(ActionKind::Create.to_string(), "create");
        assert_eq!(ActionKind::Update.to_string(), "update");
        assert_eq!(ActionKind::Delete.to_string(), "delete");
    }

    #[test]
    fn action_accessors() {
        let create = SyncAction::Create {
            entry: Entry::file("/src/a.txt"),
            dest: PathBuf::from("/dst/a.txt"),
        };
        assert_eq!(create.kind(), ActionKind::Create);
        assert_eq!(create.subject(), &PathBuf::from("/src/a.txt"));
        assert_eq!(create.dest(), Some(&PathBuf::from("/dst/a.txt")));

        let delete = SyncAction::Delete {
            entry: Entry::directory("/dst/stale"),
        };
        assert_eq!(delete.kind(), ActionKind::Delete);
        assert_eq!(delete.subject(), &PathBuf::from("/dst/stale"));
        assert_eq!(delete.dest(), None);
    }

    #[test]
    fn fingerprint_equality() {
        let a = Fingerprint::from(String::from("abc123"));
        let b = Fingerprint(String::from("abc123"));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "abc123");
    }

    #[test]
    fn action_serde_shape() {
        let action = SyncAction::Delete {
            entry: Entry::file("/dst/stale.txt"),
        };
        let json = serde_json::to_value(&action).expect("serialize");
        assert_eq!(json["action"], "delete");
        assert_eq!(json["entry"]["kind"], "file");
    }
}
