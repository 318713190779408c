//! Periodic scheduler — runs a full pass, sleeps, repeats.
//!
//! Single-threaded and blocking: passes execute strictly sequentially and the
//! inter-pass sleep is the only suspension point. A pass-level error is
//! reported and the loop continues at the next interval boundary; only the
//! external shutdown flag ends the loop, and doing so is not an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use mirra_core::PathMapper;

use crate::pass::run_pass;
use crate::report::Reporter;

/// Granularity at which the inter-pass sleep re-checks the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Terminal state of a scheduler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// The loop is executing passes. Never returned; observable only while
    /// [`SyncScheduler::run`] is on the stack.
    Running,
    /// The shutdown flag was observed and the loop exited cleanly.
    Terminated,
}

/// Drives detect-then-mutate passes at a fixed interval.
#[derive(Debug, Clone)]
pub struct SyncScheduler {
    interval: Duration,
    shutdown: Arc<AtomicBool>,
}

impl SyncScheduler {
    pub fn new(interval: Duration) -> Self {
        SyncScheduler {
            interval,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag handle for the external interruption signal. Setting it makes
    /// the loop exit at the next check, without treating it as an error.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Enter the Running state: execute one full pass immediately, then
    /// sleep the interval, then repeat until shut down.
    ///
    /// Errors escaping a pass are handed to the reporter and the loop
    /// continues; they never terminate the scheduler.
    pub fn run(&self, mapper: &PathMapper, reporter: &dyn Reporter) -> SchedulerState {
        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                return SchedulerState::Terminated;
            }

            match run_pass(mapper, reporter) {
                Ok(summary) => {
                    tracing::debug!(
                        detected = summary.detected,
                        failed = summary.failed,
                        duration_ms = summary.duration_ms as u64,
                        "pass complete"
                    );
                }
                Err(err) => reporter.pass_failed(&err),
            }

            if !self.sleep_interval() {
                return SchedulerState::Terminated;
            }
        }
    }

    /// Sleep for the configured interval in shutdown-poll slices.
    /// Returns false when the shutdown flag was raised mid-sleep.
    fn sleep_interval(&self) -> bool {
        let mut remaining = self.interval;
        while !remaining.is_zero() {
            if self.shutdown.load(Ordering::Relaxed) {
                return false;
            }
            let slice = remaining.min(SHUTDOWN_POLL);
            thread::sleep(slice);
            remaining -= slice;
        }
        !self.shutdown.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
