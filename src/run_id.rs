//! Process-level run ID for correlating scoring runs in logs.
//!
//! Every batch scored within one process shares the same ULID, so downstream
//! consumers (application tracker, CLI display) can tie a ranked list back to
//! the run that produced it.

use once_cell::sync::Lazy;
use ulid::Ulid;

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Returns the process-level run ID (stable for the process lifetime,
/// 26 characters, lexicographically time-ordered).
#[inline]
pub fn get() -> &'static str {
    &RUN_ID
}

/// Generates a fresh ULID for sub-operations, e.g. one per ranked batch.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
