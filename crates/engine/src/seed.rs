//! Deterministic per-day, per-identity seed derivation.
//!
//! The seed replaces runtime randomness everywhere downstream: phrase bank
//! indices are `seed % bank_len`, so the same user sees the same brief all
//! day and a different one tomorrow. Sha256 gives a distribution close to
//! uniform modulo small bank sizes and is stable across processes.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Derive the daily seed for `(identity, date)`.
///
/// Pure and total. Same inputs always yield the same seed; any change to
/// the calendar day changes it, even for an empty identity.
pub fn daily_seed(identity: &str, date: NaiveDate) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    hasher.update(b":");
    hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
    let digest = hasher.finalize();
    // First 8 bytes, big-endian. The digest is 32 bytes so this never panics.
    u64::from_be_bytes(digest[..8].try_into().unwrap_or([0; 8]))
}
