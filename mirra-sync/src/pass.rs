//! One pass: detect, then mutate, then summarize.
//!
//! Passes are stateless. Nothing — fingerprints, action lists, walk results —
//! survives from one pass to the next; every pass recomputes from the live
//! filesystem state observed during its own traversal.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use mirra_core::PathMapper;

use crate::apply::apply_all;
use crate::detect::detect_changes;
use crate::error::SyncError;
use crate::report::Reporter;

/// Outcome of one complete detect-then-mutate cycle.
#[derive(Debug, Clone, Serialize)]
pub struct PassSummary {
    pub started_at: DateTime<Utc>,
    /// Actions the detector planned for this pass.
    pub detected: usize,
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    /// Entries skipped during detection, retried next pass.
    pub skipped: usize,
    /// Actions that failed to execute.
    pub failed: usize,
    pub duration_ms: u128,
}

impl PassSummary {
    /// True when the pass changed nothing and skipped nothing — the replica
    /// already mirrored the source.
    pub fn is_noop(&self) -> bool {
        self.detected == 0 && self.skipped == 0
    }
}

/// Run one full pass over both trees.
///
/// Per-entry and per-action failures are reported and isolated inside the
/// pass; only a failure to walk the roots themselves escapes as an error.
pub fn run_pass(mapper: &PathMapper, reporter: &dyn Reporter) -> Result<PassSummary, SyncError> {
    let started_at = Utc::now();
    let clock = Instant::now();

    let outcome = detect_changes(mapper, reporter)?;
    let detected = outcome.actions.len();
    let stats = apply_all(&outcome.actions, reporter);

    let summary = PassSummary {
        started_at,
        detected,
        created: stats.created,
        updated: stats.updated,
        deleted: stats.deleted,
        skipped: outcome.skipped,
        failed: stats.failed,
        duration_ms: clock.elapsed().as_millis(),
    };
    reporter.pass_completed(&summary);
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
