//! Whole-file content digests for change detection.
//!
//! Files are compared by SHA-256 over their entire byte content, read in
//! chunks so large files never sit in memory at once. A cheap size pre-check
//! in [`files_differ`] avoids hashing when lengths already disagree: differing
//! sizes imply differing content, and a size match alone never suppresses the
//! full digest comparison, so false negatives cannot occur.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{fp_err, FingerprintError};
use crate::types::Fingerprint;

const READ_CHUNK: usize = 64 * 1024;

/// Compute the content digest of the file at `path`.
///
/// Reads the complete file. Not defined for directories — directory equality
/// is existence-only and never reaches this function.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, FingerprintError> {
    let mut file = File::open(path).map_err(|e| fp_err(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        let n = file.read(&mut buf).map_err(|e| fp_err(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Fingerprint(hex::encode(hasher.finalize())))
}

/// Decide whether two files hold different content.
///
/// Compares byte lengths first; only equal-length files are hashed.
pub fn files_differ(a: &Path, b: &Path) -> Result<bool, FingerprintError> {
    let len_a = std::fs::metadata(a).map_err(|e| fp_err(a, e))?.len();
    let len_b = std::fs::metadata(b).map_err(|e| fp_err(b, e))?.len();
    if len_a != len_b {
        return Ok(true);
    }
    Ok(fingerprint_file(a)? != fingerprint_file(b)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn identical_content_has_identical_fingerprint() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "hello").expect("write a");
        fs::write(&b, "hello").expect("write b");
        assert_eq!(
            fingerprint_file(&a).expect("fp a"),
            fingerprint_file(&b).expect("fp b")
        );
    }

    #[test]
    fn different_content_has_different_fingerprint() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "hello").expect("write a");
        fs::write(&b, "world").expect("write b");
        assert_ne!(
            fingerprint_file(&a).expect("fp a"),
            fingerprint_file(&b).expect("fp b")
        );
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("empty");
        fs::write(&path, "").expect("write");
        // SHA-256 of the empty string.
        assert_eq!(
            fingerprint_file(&path).expect("fp").0,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn missing_file_reports_its_path() {
        let tmp = TempDir::new().expect("tempdir");
        let missing = tmp.path().join("nope.txt");
        let err = fingerprint_file(&missing).expect_err("must fail");
        assert_eq!(err.path, missing);
    }

    #[test]
    fn files_differ_on_length_without_hashing() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "short").expect("write a");
        fs::write(&b, "much longer content").expect("write b");
        assert!(files_differ(&a, &b).expect("compare"));
    }

    #[test]
    fn files_differ_same_length_different_bytes() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "hello").expect("write a");
        fs::write(&b, "world").expect("write b");
        assert!(files_differ(&a, &b).expect("compare"));
    }

    #[test]
    fn files_differ_false_for_equal_files() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "same").expect("write a");
        fs::write(&b, "same").expect("write b");
        assert!(!files_differ(&a, &b).expect("compare"));
    }

    #[test]
    fn chunked_read_covers_large_files() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("big_a");
        let b = tmp.path().join("big_b");
        // Larger than one read chunk; differ only in the final byte.
        let mut content = vec![b'x'; READ_CHUNK * 2 + 17];
        fs::write(&a, &content).expect("write a");
        *content.last_mut().expect("non-empty") = b'y';
        fs::write(&b, &content).expect("write b");
        assert!(files_differ(&a, &b).expect("compare"));
    }
}
