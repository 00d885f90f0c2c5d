//! Test fixtures and helpers.
//!
//! Stand-ins for the records an application would attach a CAA to: an entity
//! carrying the CAA and its window, and the sessions minted against it.

use std::sync::Arc;
use std::time::Duration;

use compandauth::{to_seconds, AnyCaa, Caa, CaaConfig, Clock, ManualClock, SessionToken};

/// A session as an application would store it, e.g. decoded from a JWT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub caa: SessionToken,
}

impl Session {
    pub fn new(caa: SessionToken) -> Self {
        Self { caa }
    }
}

/// An entity using the counter strategy.
#[derive(Debug, Clone)]
pub struct CounterEntity {
    pub delta: i64,
    pub caa: AnyCaa,
}

impl CounterEntity {
    pub fn new(delta: i64) -> Self {
        Self {
            delta,
            caa: CaaConfig::counter(delta).build(),
        }
    }

    /// Issue one session.
    pub fn login(&mut self) -> Session {
        Session::new(self.caa.issue())
    }

    /// Issue `n` sessions in order.
    pub fn login_many(&mut self, n: usize) -> Vec<Session> {
        (0..n).map(|_| self.login()).collect()
    }

    /// Revoke the oldest `n` sessions.
    pub fn revoke(&mut self, n: i64) {
        self.caa.revoke(n);
    }

    pub fn accepts(&self, session: &Session) -> bool {
        self.caa.is_valid(session.caa, self.delta)
    }
}

/// An entity using the timeout strategy, driven by a shared manual clock.
#[derive(Debug, Clone)]
pub struct TimeoutEntity {
    pub timeout: Duration,
    pub clock: Arc<ManualClock>,
    pub caa: AnyCaa<Arc<ManualClock>>,
}

impl TimeoutEntity {
    /// Create an entity whose clock is pinned at `start` (Unix seconds).
    pub fn new(timeout: Duration, start: i64) -> Self {
        let clock = ManualClock::shared(start);
        let caa = CaaConfig::timeout(timeout).build_with_clock(Arc::clone(&clock));
        Self {
            timeout,
            clock,
            caa,
        }
    }

    pub fn timeout_secs(&self) -> i64 {
        to_seconds(self.timeout)
    }

    pub fn now(&self) -> i64 {
        self.clock.now_unix_secs()
    }

    /// Issue one session at the current clock time.
    pub fn login(&mut self) -> Session {
        Session::new(self.caa.issue())
    }

    /// Issue one session per second until the clock reaches `end`.
    pub fn login_every_second_until(&mut self, end: i64) -> Vec<Session> {
        let mut sessions = Vec::new();
        while self.now() < end {
            sessions.push(self.login());
            self.clock.advance(1);
        }
        sessions
    }

    /// Revoke every session issued before `cutoff` (Unix seconds).
    pub fn revoke(&mut self, cutoff: i64) {
        self.caa.revoke(cutoff);
    }

    pub fn accepts(&self, session: &Session) -> bool {
        self.caa.is_valid(session.caa, self.timeout_secs())
    }

    /// Whether `session` is older than the timeout as of now.
    pub fn is_expired(&self, session: &Session) -> bool {
        self.now() - session.caa.magnitude() > self.timeout_secs()
    }
}
