//! Unified error types for the scalefmt workspace.
//!
//! Every failure is raised while a value is being formatted, before any
//! result becomes observable.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input could not be coerced to a finite number.
    #[error("not a finite number: {input:?}")]
    InvalidNumber {
        /// The rejected input, as text.
        input: String,
    },

    /// A unit family tag did not name a known family.
    #[error("unknown unit family: {tag:?}")]
    InvalidUnitFamily {
        /// The rejected tag.
        tag: String,
    },

    /// The selected tier has no entry in the prefix table.
    #[error("tier {tier} is outside the unit table ({len} entries)")]
    TierOutOfRange {
        /// Tier that was selected or forced.
        tier: u32,
        /// Number of entries in the table in use.
        len: usize,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FormatError>;
