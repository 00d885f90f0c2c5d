//! Error types for compandauth.

use compandauth_core::StateError;
use thiserror::Error;

/// Errors from configuring or restoring a CAA.
///
/// Issuing, validating, and revoking never fail; these only surface where a
/// CAA is built from outside input.
#[derive(Debug, Error)]
pub enum CaaError {
    /// Persisted state could not be decoded.
    #[error("invalid state: {0}")]
    State(#[from] StateError),

    /// Strategy name is not `counter` or `timeout`.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Window must be a non-negative delta or duration.
    #[error("invalid window: {0}")]
    InvalidWindow(i64),
}

/// Result type for compandauth operations.
pub type Result<T> = std::result::Result<T, CaaError>;
