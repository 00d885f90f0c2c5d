//! Known scenarios with their expected outcomes.
//!
//! Each table pairs an issuance history with the sessions that must still be
//! accepted afterwards, so every strategy change can be checked against the
//! same fixed expectations.

use crate::fixtures::{CounterEntity, Session};

/// Issue `sessions` tokens with window `delta`, then revoke `revoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevokeScenario {
    pub delta: i64,
    pub sessions: i64,
    pub revoke: i64,
}

impl RevokeScenario {
    pub const fn new(delta: i64, sessions: i64, revoke: i64) -> Self {
        Self {
            delta,
            sessions,
            revoke,
        }
    }

    /// Index of the first session still valid after the revoke.
    ///
    /// Sessions before this index must be rejected; the rest accepted.
    pub fn first_valid(&self) -> usize {
        let offset = (self.sessions - self.delta + self.revoke).min(self.sessions);
        offset.max(0) as usize
    }

    /// How many sessions remain valid.
    pub fn expected_valid(&self) -> usize {
        (self.delta - self.revoke).max(0) as usize
    }

    /// Play the scenario, returning the entity and the sessions issued.
    pub fn run(&self) -> (CounterEntity, Vec<Session>) {
        let mut entity = CounterEntity::new(self.delta);
        let sessions = entity.login_many(self.sessions as usize);
        entity.revoke(self.revoke);
        (entity, sessions)
    }

    /// Play the scenario and report whether every session got the expected
    /// verdict.
    pub fn holds(&self) -> bool {
        let (entity, sessions) = self.run();
        let first_valid = self.first_valid();

        sessions
            .iter()
            .enumerate()
            .all(|(i, s)| entity.accepts(s) == (i >= first_valid))
    }
}

/// Revocation table for the counter strategy.
pub fn counter_revoke_scenarios() -> Vec<RevokeScenario> {
    let mut scenarios = vec![
        RevokeScenario::new(0, 0, 0),
        RevokeScenario::new(0, 0, 1),
        RevokeScenario::new(0, 1, 1),
        RevokeScenario::new(1, 1, 0),
        RevokeScenario::new(1, 0, 1),
        RevokeScenario::new(1, 1, 1),
        RevokeScenario::new(1, 2, 2),
    ];
    scenarios.extend((1..=11).map(|n| RevokeScenario::new(10, 10, n)));
    scenarios.extend([
        RevokeScenario::new(5, 100, 50),
        RevokeScenario::new(5, 100, 99),
        RevokeScenario::new(5, 100, 150),
    ]);
    scenarios
}

/// `(delta, sessions)` pairs for the sliding-window check.
pub fn counter_window_scenarios() -> Vec<(i64, usize)> {
    vec![(0, 10), (1, 100), (5, 1_000), (10, 2_000)]
}
