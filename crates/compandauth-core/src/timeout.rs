//! Expiry-window CAA over wall-clock time.
//!
//! Tokens are issuance timestamps. The frontier is an anchor timestamp set on
//! the first issue; sessions issued before the anchor are rejected, and every
//! session also expires `duration` seconds after it was issued:
//!
//! ```text
//! valid  <=>  !locked && issued
//!             && |token| >= anchor
//!             && |token| + |duration| >= now
//! ```
//!
//! Revoking rebases the anchor to an arbitrary timestamp, typically now.

use crate::caa::Caa;
use crate::clock::{Clock, SystemClock};
use crate::state::CaaState;
use crate::types::SessionToken;
use crate::util::abs;

/// Timeout strategy, reading time from `C`.
#[derive(Debug, Clone, Default)]
pub struct TimeoutCaa<C = SystemClock> {
    state: CaaState,
    clock: C,
}

impl TimeoutCaa<SystemClock> {
    /// A fresh, unissued timeout CAA on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> TimeoutCaa<C> {
    /// A fresh, unissued timeout CAA on `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::from_state(CaaState::UNISSUED, clock)
    }

    /// Restore from persisted state.
    pub fn from_state(state: CaaState, clock: C) -> Self {
        Self { state, clock }
    }

    /// The anchor timestamp; zero when unissued.
    pub fn anchor(&self) -> i64 {
        self.state.frontier()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Caa for TimeoutCaa<C> {
    fn lock(&mut self) {
        self.state.lock();
    }

    fn unlock(&mut self) {
        self.state.unlock();
    }

    fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    fn is_valid(&self, token: SessionToken, duration_secs: i64) -> bool {
        if self.is_locked() || !self.has_issued() {
            return false;
        }

        let issued_at = token.magnitude();
        issued_at >= self.state.frontier()
            && issued_at.saturating_add(abs(duration_secs)) >= self.clock.now_unix_secs()
    }

    /// Invalidate every session issued before `expiry_timestamp` (Unix
    /// seconds). Ignored before the first issue; the lock is kept.
    fn revoke(&mut self, expiry_timestamp: i64) {
        if !self.has_issued() {
            return;
        }
        self.state.rebase(expiry_timestamp);
    }

    /// Returns the current time. Only the first issue sets the anchor.
    fn issue(&mut self) -> SessionToken {
        let now = self.clock.now_unix_secs();
        if !self.has_issued() {
            self.state = CaaState::unlocked(now);
        }
        SessionToken::new(now)
    }

    fn has_issued(&self) -> bool {
        self.state.has_issued()
    }

    fn state(&self) -> CaaState {
        self.state
    }
}
