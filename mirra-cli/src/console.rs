//! Production reporter: structured log plus human-readable console echo.
//!
//! Every engine event lands in two places with the same content — the
//! tracing log (INFO for executed actions, ERROR for failures) and a short
//! echo line. The echo goes to stdout by default; with machine-readable
//! output on stdout (`--json`) it moves to stderr so stdout stays clean.

use std::path::Path;

use mirra_core::SyncAction;
use mirra_sync::{PassSummary, Reporter, SyncError};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    stderr_echo: bool,
}

impl ConsoleReporter {
    /// Echo lines to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo lines to stderr, leaving stdout free for machine output.
    pub fn stderr_echo() -> Self {
        ConsoleReporter { stderr_echo: true }
    }

    fn echo(&self, line: String) {
        if self.stderr_echo {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

impl Reporter for ConsoleReporter {
    fn action_applied(&self, action: &SyncAction) {
        match action {
            SyncAction::Create { entry, dest } => {
                tracing::info!("copied {} to {}", entry.path.display(), dest.display());
                self.echo(format!(
                    "  + copied {} -> {}",
                    entry.path.display(),
                    dest.display()
                ));
            }
            SyncAction::Update { entry, dest } => {
                tracing::info!("updated {} from {}", dest.display(), entry.path.display());
                self.echo(format!("  ~ updated {}", dest.display()));
            }
            SyncAction::Delete { entry } => {
                tracing::info!("deleted {}", entry.path.display());
                self.echo(format!("  - deleted {}", entry.path.display()));
            }
        }
    }

    fn action_failed(&self, action: &SyncAction, error: &SyncError) {
        tracing::error!(
            "{} failed for {}: {}",
            action.kind(),
            action.subject().display(),
            error
        );
        self.echo(format!(
            "  ! {} failed for {}: {}",
            action.kind(),
            action.subject().display(),
            error
        ));
    }

    fn entry_skipped(&self, path: &Path, error: &SyncError) {
        tracing::error!("skipped {}: {}", path.display(), error);
        self.echo(format!("  ! skipped {}: {}", path.display(), error));
    }

    fn pass_completed(&self, summary: &PassSummary) {
        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            deleted = summary.deleted,
            skipped = summary.skipped,
            failed = summary.failed,
            duration_ms = summary.duration_ms as u64,
            "pass complete"
        );
        if summary.is_noop() {
            self.echo("· nothing to do".to_string());
        } else {
            self.echo(format!(
                "✓ pass complete ({} created, {} updated, {} deleted, {} skipped, {} failed, {} ms)",
                summary.created,
                summary.updated,
                summary.deleted,
                summary.skipped,
                summary.failed,
                summary.duration_ms
            ));
        }
    }

    fn pass_failed(&self, error: &SyncError) {
        tracing::error!("pass failed: {error}");
        self.echo(format!("! pass failed: {error}"));
    }
}
