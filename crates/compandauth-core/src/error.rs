//! Error types for compandauth core.

use thiserror::Error;

/// Errors raised when decoding a persisted CAA state.
///
/// The capability set itself never fails; only the boundary where a stored
/// integer is turned back into a [`CaaState`](crate::CaaState) can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("encoded state {0} has no representable frontier")]
    OutOfRange(i64),
}
