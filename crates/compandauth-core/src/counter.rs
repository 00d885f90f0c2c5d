//! Sliding-window CAA over an issuance count.
//!
//! Each `issue` hands out the current frontier and bumps it by one. A session
//! is valid while its token is within the last `delta` issuances:
//!
//! ```text
//! valid  <=>  !locked && issued && |token| + |delta| >= frontier
//! ```
//!
//! Revoking `n` moves the frontier forward by `n`, dropping the oldest `n`
//! sessions out of every window without having to know what they were.

use crate::caa::Caa;
use crate::state::CaaState;
use crate::types::SessionToken;
use crate::util::abs;

/// Counter strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterCaa {
    state: CaaState,
}

impl CounterCaa {
    /// A fresh, unissued counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a counter from persisted state.
    pub fn from_state(state: CaaState) -> Self {
        Self { state }
    }
}

impl Caa for CounterCaa {
    fn lock(&mut self) {
        self.state.lock();
    }

    fn unlock(&mut self) {
        self.state.unlock();
    }

    fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    fn is_valid(&self, token: SessionToken, delta: i64) -> bool {
        !self.is_locked()
            && self.has_issued()
            && token.magnitude().saturating_add(abs(delta)) >= self.state.frontier()
    }

    /// Invalidate the oldest `n` outstanding sessions. Pass the delta to
    /// invalidate all of them.
    ///
    /// Has no effect before the first issue. While locked the frontier still
    /// moves, taking effect once unlocked.
    fn revoke(&mut self, n: i64) {
        if !self.has_issued() {
            return;
        }
        self.state.advance(n);
    }

    /// Returns the current frontier and steps it by one. Issuing while locked
    /// still steps; the new session validates once the counter is unlocked.
    fn issue(&mut self) -> SessionToken {
        let token = SessionToken::new(self.state.frontier());
        self.state.advance(1);
        token
    }

    fn has_issued(&self) -> bool {
        self.state.has_issued()
    }

    fn state(&self) -> CaaState {
        self.state
    }
}
