//! Mirra core library — domain types, path mapping, fingerprinting, errors.
//!
//! Public API surface:
//! - [`types`] — entries, actions, fingerprints
//! - [`error`] — [`MapError`], [`FingerprintError`]
//! - [`mapping`] — [`PathMapper`]
//! - [`fingerprint`] — whole-file content digests

pub mod error;
pub mod fingerprint;
pub mod mapping;
pub mod types;

pub use error::{FingerprintError, MapError};
pub use fingerprint::{files_differ, fingerprint_file};
pub use mapping::PathMapper;
pub use types::{ActionKind, Entry, EntryKind, Fingerprint, SyncAction};
