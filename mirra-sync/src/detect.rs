//! Change detection — walks both trees and plans the pass's actions.
//!
//! A pass runs two phases in strict order. Phase A walks the source tree
//! top-down and emits `Create`/`Update` actions; Phase B walks the replica
//! tree top-down and emits `Delete` actions for entries with no source
//! counterpart. Phase A completes in full before Phase B starts, so a
//! freshly-appearing source item is always materialized before the stale
//! sweep runs.
//!
//! A missing directory counterpart becomes a single whole-subtree `Create`
//! and the walk does not descend into it; likewise a stale replica directory
//! becomes a single `Delete`. Per-entry failures (unreadable file or
//! directory, unmappable path) are reported and skipped for this pass — the
//! walk itself never aborts on them.

use std::fs;
use std::path::{Path, PathBuf};

use mirra_core::{files_differ, Entry, EntryKind, PathMapper, SyncAction};

use crate::error::{io_err, SyncError};
use crate::report::Reporter;

/// Result of one detection run.
#[derive(Debug)]
pub struct DetectOutcome {
    /// Planned actions, creates/updates strictly before deletes.
    pub actions: Vec<SyncAction>,
    /// Entries skipped this pass; they are reconsidered next pass.
    pub skipped: usize,
}

/// Walk both trees once and plan the actions for this pass.
///
/// Failure to read either root directory aborts detection (pass-level
/// error); everything below the roots is isolated per entry.
pub fn detect_changes(
    mapper: &PathMapper,
    reporter: &dyn Reporter,
) -> Result<DetectOutcome, SyncError> {
    let mut walker = Walker {
        mapper,
        reporter,
        actions: Vec::new(),
        skipped: 0,
    };

    // Phase A: create/update, source walked top-down.
    let source_entries =
        read_dir_sorted(mapper.source_root()).map_err(|e| io_err(mapper.source_root(), e))?;
    for (path, kind) in source_entries {
        walker.visit_source(path, kind);
    }

    // Phase B: delete, replica walked top-down. Runs only once Phase A has
    // seen the whole source tree.
    let replica_entries =
        read_dir_sorted(mapper.replica_root()).map_err(|e| io_err(mapper.replica_root(), e))?;
    for (path, kind) in replica_entries {
        walker.visit_replica(path, kind);
    }

    Ok(DetectOutcome {
        actions: walker.actions,
        skipped: walker.skipped,
    })
}

struct Walker<'a> {
    mapper: &'a PathMapper,
    reporter: &'a dyn Reporter,
    actions: Vec<SyncAction>,
    skipped: usize,
}

impl Walker<'_> {
    fn visit_source(&mut self, path: PathBuf, kind: EntryKind) {
        let dest = match self.mapper.to_replica(&path) {
            Ok(dest) => dest,
            Err(err) => return self.skip(&path, err.into()),
        };

        match (kind, kind_of(&dest)) {
            (EntryKind::File, None) => self.actions.push(SyncAction::Create {
                entry: Entry::file(path),
                dest,
            }),
            (EntryKind::File, Some(EntryKind::File)) => match files_differ(&path, &dest) {
                Ok(true) => self.actions.push(SyncAction::Update {
                    entry: Entry::file(path),
                    dest,
                }),
                Ok(false) => tracing::trace!("unchanged: {}", path.display()),
                Err(err) => self.skip(&path, err.into()),
            },
            // The replica holds a directory where a file belongs; the
            // mutator clears it before copying.
            (EntryKind::File, Some(EntryKind::Directory)) => {
                self.actions.push(SyncAction::Update {
                    entry: Entry::file(path),
                    dest,
                })
            }
            // Whole subtree in one action; no descent into it.
            (EntryKind::Directory, None) | (EntryKind::Directory, Some(EntryKind::File)) => {
                self.actions.push(SyncAction::Create {
                    entry: Entry::directory(path),
                    dest,
                })
            }
            (EntryKind::Directory, Some(EntryKind::Directory)) => self.descend_source(&path),
        }
    }

    fn descend_source(&mut self, dir: &Path) {
        let entries = match read_dir_sorted(dir) {
            Ok(entries) => entries,
            Err(err) => return self.skip(dir, io_err(dir, err)),
        };
        for (path, kind) in entries {
            self.visit_source(path, kind);
        }
    }

    fn visit_replica(&mut self, path: PathBuf, kind: EntryKind) {
        let source = match self.mapper.to_source(&path) {
            Ok(source) => source,
            Err(err) => return self.skip(&path, err.into()),
        };

        if !source.exists() {
            // Whole subtree in one action; no descent into it.
            self.actions.push(SyncAction::Delete {
                entry: Entry { path, kind },
            });
        } else if kind == EntryKind::Directory {
            self.descend_replica(&path);
        }
    }

    fn descend_replica(&mut self, dir: &Path) {
        let entries = match read_dir_sorted(dir) {
            Ok(entries) => entries,
            Err(err) => return self.skip(dir, io_err(dir, err)),
        };
        for (path, kind) in entries {
            self.visit_replica(path, kind);
        }
    }

    fn skip(&mut self, path: &Path, err: SyncError) {
        self.skipped += 1;
        self.reporter.entry_skipped(path, &err);
    }
}

/// Classify a path, following symlinks. `None` means absent (or unreadable,
/// which the caller treats the same: the copy attempt will surface the
/// real error).
fn kind_of(path: &Path) -> Option<EntryKind> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Some(EntryKind::Directory),
        Ok(_) => Some(EntryKind::File),
        Err(_) => None,
    }
}

/// List a directory's children sorted by name, for deterministic walks.
fn read_dir_sorted(dir: &Path) -> std::io::Result<Vec<(PathBuf, EntryKind)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let kind = if entry.file_type()?.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push((entry.path(), kind));
    }
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
