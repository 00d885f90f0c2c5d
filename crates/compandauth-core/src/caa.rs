//! The compare-and-authenticate capability set.

use crate::state::CaaState;
use crate::types::SessionToken;

/// Operations shared by every CAA strategy.
///
/// None of these can fail. Numeric inputs are sign-normalized, and anything
/// that cannot be judged valid (unissued, locked, out of window) is reported
/// as invalid.
pub trait Caa {
    /// Stop every session from validating without touching the frontier.
    fn lock(&mut self);

    /// Undo [`lock`](Self::lock).
    fn unlock(&mut self);

    fn is_locked(&self) -> bool;

    /// Decide whether `token` is still acceptable.
    ///
    /// `window` is the number of recent issuances for the counter strategy and
    /// the session lifetime in seconds for the timeout strategy.
    fn is_valid(&self, token: SessionToken, window: i64) -> bool;

    /// Invalidate a range of previously issued sessions.
    fn revoke(&mut self, n: i64);

    /// Mint the token for a new session.
    fn issue(&mut self) -> SessionToken;

    /// Whether anything has been issued, locked or not.
    fn has_issued(&self) -> bool;

    /// The current state, for persisting alongside the entity.
    fn state(&self) -> CaaState;
}
