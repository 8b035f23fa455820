//! # Error Types
//!
//! This module defines error types used throughout the relieve library.
//!
//! All errors surface to the caller unchanged: nothing is retried
//! internally and nothing is downgraded to a warning. The only
//! "recoverable" behavior in the crate is the capability fallback in
//! [`crate::dispatch::Capability::from_tag`], which is a documented
//! policy choice rather than error handling.

use thiserror::Error;

/// Main error type for relieve operations
#[derive(Debug, Error)]
pub enum RelieveError {
    /// Out-of-range index or otherwise invalid value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Bit pattern absent from the loaded braille table
    #[error("Missing table key: {0}")]
    MissingKey(String),

    /// Unrecognized braille table file extension
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// Table resource unreadable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Assembly invoked without data
    #[error("No input data: {0}")]
    NullInput(String),

    /// No transport matches the configured device
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    /// The transport refused the print payload
    #[error("Transport rejected: {0}")]
    TransportRejected(String),
}
