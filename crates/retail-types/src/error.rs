//! Error types for retail-types crate.

use thiserror::Error;

/// Errors that can occur while encoding or decoding transactions.
#[derive(Error, Debug)]
pub enum RetailTypesError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp '{value}': {message}")]
    Timestamp { value: String, message: String },

    #[error("Total amount mismatch: items sum to {expected}, message says {actual}")]
    TotalMismatch { expected: u64, actual: u64 },

    #[error("Total amount overflows u64")]
    Overflow,

    #[error("Transaction has no items")]
    EmptyItems,
}

/// Result type alias for retail-types operations.
pub type Result<T> = std::result::Result<T, RetailTypesError>;
