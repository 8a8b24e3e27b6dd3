//! Access gate: code verification and the per-session entry flag.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::util::storage;

/// The access code admitting visitors past the gate.
const ACCESS_CODE: &str = "2026";

/// `sessionStorage` key for the entry flag.
const SESSION_KEY: &str = "access_granted";

/// Whether `input` matches the access code. Exact match; no trimming.
#[must_use]
pub fn verify(input: &str) -> bool {
    input == ACCESS_CODE
}

/// Read the stored session flag.
#[must_use]
pub fn stored_access() -> bool {
    storage::load_session(SESSION_KEY).unwrap_or(false)
}

/// Persist the session flag after a successful gate entry.
pub fn grant_access() {
    storage::save_session(SESSION_KEY, &true);
}
