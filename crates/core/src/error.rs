//! Error types for the astrobrief domain.
//!
//! The engine itself is total — malformed or sparse runtime input degrades
//! gracefully instead of failing. Configuration contract violations are
//! caught at construction time by the config crate's own error type, so
//! the only failure this crate can surface is serialization of the output
//! record.

use thiserror::Error;

/// The top-level error type for astrobrief operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_failures_convert_and_display() {
        let inner = serde_json::from_str::<crate::token::Token>("not json").unwrap_err();
        let err = Error::from(inner);
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
