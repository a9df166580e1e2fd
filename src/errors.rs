//! Unified error types and result handling.
//!
//! Every mutation on the planning state reports failures through [`Error`] so the
//! presentation layer can surface them as form validation messages. Reads never
//! fail: a missing planning cell is zero and a dangling SKU reference yields `None`.

use thiserror::Error;

/// Errors produced by the planning engine and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or blank.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description of the offending field
        message: String,
    },

    /// A numeric input was negative, not finite, or above [`crate::entities::MAX_AMOUNT`].
    #[error("Invalid {field}: {amount}")]
    InvalidAmount {
        /// Name of the field that carried the value
        field: &'static str,
        /// The rejected value
        amount: f64,
    },

    /// An add was attempted with an id that already exists.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateKey {
        /// Record kind ("store", "sku")
        kind: &'static str,
        /// The conflicting id
        id: String,
    },

    /// A referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("store", "sku", "week")
        kind: &'static str,
        /// The missing id
        id: String,
    },

    /// A reorder position fell outside the current sequence.
    #[error("Index {index} out of range for {len} records")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of records at the time of the call
        len: usize,
    },

    /// Configuration or seed data could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a text report failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl Error {
    /// Returns true for errors that stem from rejected user input
    /// (blank fields and negative or non-finite numbers).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidAmount { .. })
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
