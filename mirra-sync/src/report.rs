//! Event sink for pass, action, and entry outcomes.
//!
//! The reporter is an explicit dependency: the entry point constructs one and
//! passes it into the detector, mutator, and scheduler. Per-entry and
//! per-action failures are surfaced here and never abort the surrounding
//! pass, which keeps the isolate-and-continue contract observable by tests.

use std::path::Path;

use mirra_core::SyncAction;

use crate::error::SyncError;
use crate::pass::PassSummary;

/// Receives every observable outcome of the engine.
///
/// All methods default to no-ops so implementations subscribe only to what
/// they need.
pub trait Reporter {
    /// An action was executed successfully.
    fn action_applied(&self, _action: &SyncAction) {}

    /// An action failed; the remaining actions of the pass still run.
    fn action_failed(&self, _action: &SyncAction, _error: &SyncError) {}

    /// An entry was skipped during detection (unreadable file or directory,
    /// unmappable path); it will be reconsidered on the next pass.
    fn entry_skipped(&self, _path: &Path, _error: &SyncError) {}

    /// A full pass finished, including passes with failed actions.
    fn pass_completed(&self, _summary: &PassSummary) {}

    /// A pass aborted before completing both phases.
    fn pass_failed(&self, _error: &SyncError) {}
}

/// A reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}
