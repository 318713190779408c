//! Mutation application — executes planned actions against the replica.
//!
//! One action, one mutation: a file copy, a recursive tree copy, or a file
//! or tree removal. Failures are isolated per action; [`apply_all`] always
//! runs every action it is given and reports each outcome through the
//! caller's [`Reporter`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use mirra_core::{EntryKind, SyncAction};

use crate::error::{copy_err, io_err, SyncError};
use crate::report::Reporter;

/// Counts of executed actions for one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyStats {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub failed: usize,
}

/// Execute every action, isolating failures.
///
/// A failed copy or delete is reported and counted; the remaining actions
/// still run.
pub fn apply_all(actions: &[SyncAction], reporter: &dyn Reporter) -> ApplyStats {
    let mut stats = ApplyStats::default();
    for action in actions {
        match apply_action(action) {
            Ok(()) => {
                match action {
                    SyncAction::Create { .. } => stats.created += 1,
                    SyncAction::Update { .. } => stats.updated += 1,
                    SyncAction::Delete { .. } => stats.deleted += 1,
                }
                reporter.action_applied(action);
            }
            Err(err) => {
                stats.failed += 1;
                reporter.action_failed(action, &err);
            }
        }
    }
    stats
}

/// Execute a single action.
pub fn apply_action(action: &SyncAction) -> Result<(), SyncError> {
    match action {
        SyncAction::Create { entry, dest } | SyncAction::Update { entry, dest } => {
            match entry.kind {
                EntryKind::File => copy_file(&entry.path, dest),
                EntryKind::Directory => copy_tree(&entry.path, dest),
            }
        }
        SyncAction::Delete { entry } => match entry.kind {
            EntryKind::File => remove_file(&entry.path),
            EntryKind::Directory => remove_tree(&entry.path),
        },
    }
}

/// Copy one file's full byte content, overwriting the destination.
///
/// The parent directory is ensured first; a directory squatting on the
/// destination path is removed before the copy.
fn copy_file(src: &Path, dest: &Path) -> Result<(), SyncError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if dest.is_dir() {
        fs::remove_dir_all(dest).map_err(|e| io_err(dest, e))?;
    }
    fs::copy(src, dest).map_err(|e| copy_err(src, dest, e))?;
    Ok(())
}

/// Copy a directory and its entire subtree in one recursive action.
fn copy_tree(src: &Path, dest: &Path) -> Result<(), SyncError> {
    if dest.is_file() {
        fs::remove_file(dest).map_err(|e| io_err(dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| io_err(dest, e))?;
    for entry in fs::read_dir(src).map_err(|e| io_err(src, e))? {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let child_dest = dest.join(entry.file_name());
        if entry.file_type().map_err(|e| io_err(entry.path(), e))?.is_dir() {
            copy_tree(&entry.path(), &child_dest)?;
        } else {
            copy_file(&entry.path(), &child_dest)?;
        }
    }
    Ok(())
}

/// Remove a single file. A file that already disappeared counts as removed.
fn remove_file(path: &Path) -> Result<(), SyncError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(io_err(path, err)),
    }
}

/// Remove a directory and its entire subtree.
fn remove_tree(path: &Path) -> Result<(), SyncError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
