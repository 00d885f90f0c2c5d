//! Per-entity-type CAA configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use compandauth_core::{to_seconds, Caa, CaaState, Clock, SessionToken, SystemClock};

use crate::error::{CaaError, Result};
use crate::strategy::{AnyCaa, Strategy};

/// How entities of one kind validate their sessions.
///
/// `window` is the number of most recent sessions kept valid for the counter
/// strategy, or the session lifetime in seconds for the timeout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaConfig {
    /// Which validity rule to apply.
    pub strategy: Strategy,
    /// Delta or duration in seconds.
    pub window: i64,
}

impl Default for CaaConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Counter,
            window: 10,
        }
    }
}

impl CaaConfig {
    /// Keep the last `delta` sessions valid.
    pub fn counter(delta: i64) -> Self {
        Self {
            strategy: Strategy::Counter,
            window: delta,
        }
    }

    /// Keep sessions valid for `duration`, truncated to whole seconds.
    pub fn timeout(duration: Duration) -> Self {
        Self {
            strategy: Strategy::Timeout,
            window: to_seconds(duration),
        }
    }

    /// Check the window is usable.
    pub fn validate(&self) -> Result<()> {
        if self.window < 0 {
            return Err(CaaError::InvalidWindow(self.window));
        }
        Ok(())
    }

    /// A fresh, unissued CAA on the system clock.
    pub fn build(&self) -> AnyCaa {
        self.build_with_clock(SystemClock)
    }

    /// A fresh, unissued CAA on `clock`.
    pub fn build_with_clock<C: Clock>(&self, clock: C) -> AnyCaa<C> {
        tracing::debug!(strategy = %self.strategy, window = self.window, "building caa");
        AnyCaa::from_state(self.strategy, CaaState::UNISSUED, clock)
    }

    /// Rebuild a CAA from the integer stored with an entity.
    pub fn restore(&self, encoded: i64) -> Result<AnyCaa> {
        self.restore_with_clock(encoded, SystemClock)
    }

    pub fn restore_with_clock<C: Clock>(&self, encoded: i64, clock: C) -> Result<AnyCaa<C>> {
        let state = CaaState::decode(encoded)?;
        Ok(AnyCaa::from_state(self.strategy, state, clock))
    }

    /// Validate `token` against `caa` using the configured window.
    pub fn is_valid<A: Caa + ?Sized>(&self, caa: &A, token: SessionToken) -> bool {
        caa.is_valid(token, self.window)
    }
}
