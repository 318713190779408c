//! # mirra-sync
//!
//! The synchronization engine: change detection, mutation application, and
//! the periodic scheduler.
//!
//! Call [`pass::run_pass`] for a single detect-then-mutate cycle, or drive
//! [`scheduler::SyncScheduler`] for the periodic loop. All pass and action
//! outcomes flow through an explicit [`report::Reporter`] supplied by the
//! caller; nothing here writes to a process-global sink.

pub mod apply;
pub mod detect;
pub mod error;
pub mod pass;
pub mod report;
pub mod scheduler;

pub use error::SyncError;
pub use pass::{run_pass, PassSummary};
pub use report::{NullReporter, Reporter};
pub use scheduler::{SchedulerState, SyncScheduler};
