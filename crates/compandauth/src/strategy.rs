//! Choosing a strategy per entity.
//!
//! An entity picks counter or timeout semantics when it is created and keeps
//! that choice for life. [`AnyCaa`] holds either one behind the same [`Caa`]
//! interface so entity types don't need to be generic over the strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use compandauth_core::{Caa, CaaState, Clock, CounterCaa, SessionToken, SystemClock, TimeoutCaa};

use crate::error::CaaError;

/// Which validity rule a CAA applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Valid over the last N issuances.
    #[default]
    Counter,
    /// Valid for N seconds after issuance.
    Timeout,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::Counter => "counter",
            Strategy::Timeout => "timeout",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CaaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "counter" => Ok(Strategy::Counter),
            "timeout" => Ok(Strategy::Timeout),
            _ => Err(CaaError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Either strategy, chosen at construction.
#[derive(Debug, Clone)]
pub enum AnyCaa<C = SystemClock> {
    Counter(CounterCaa),
    Timeout(TimeoutCaa<C>),
}

impl<C: Clock> AnyCaa<C> {
    /// Rebuild a CAA of the given strategy from persisted state.
    pub fn from_state(strategy: Strategy, state: CaaState, clock: C) -> Self {
        match strategy {
            Strategy::Counter => AnyCaa::Counter(CounterCaa::from_state(state)),
            Strategy::Timeout => AnyCaa::Timeout(TimeoutCaa::from_state(state, clock)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            AnyCaa::Counter(_) => Strategy::Counter,
            AnyCaa::Timeout(_) => Strategy::Timeout,
        }
    }

    fn as_caa(&self) -> &dyn Caa {
        match self {
            AnyCaa::Counter(caa) => caa,
            AnyCaa::Timeout(caa) => caa,
        }
    }

    fn as_caa_mut(&mut self) -> &mut dyn Caa {
        match self {
            AnyCaa::Counter(caa) => caa,
            AnyCaa::Timeout(caa) => caa,
        }
    }
}

impl<C: Clock> Caa for AnyCaa<C> {
    fn lock(&mut self) {
        self.as_caa_mut().lock();
    }

    fn unlock(&mut self) {
        self.as_caa_mut().unlock();
    }

    fn is_locked(&self) -> bool {
        self.as_caa().is_locked()
    }

    fn is_valid(&self, token: SessionToken, window: i64) -> bool {
        self.as_caa().is_valid(token, window)
    }

    fn revoke(&mut self, n: i64) {
        self.as_caa_mut().revoke(n);
    }

    fn issue(&mut self) -> SessionToken {
        self.as_caa_mut().issue()
    }

    fn has_issued(&self) -> bool {
        self.as_caa().has_issued()
    }

    fn state(&self) -> CaaState {
        self.as_caa().state()
    }
}

impl<C> From<CounterCaa> for AnyCaa<C> {
    fn from(caa: CounterCaa) -> Self {
        AnyCaa::Counter(caa)
    }
}

impl<C> From<TimeoutCaa<C>> for AnyCaa<C> {
    fn from(caa: TimeoutCaa<C>) -> Self {
        AnyCaa::Timeout(caa)
    }
}
