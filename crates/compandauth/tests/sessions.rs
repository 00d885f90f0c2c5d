//! End-to-end session lifecycles for both strategies.
//!
//! Entities issue sessions the way an application would and every stored
//! session is re-checked after each step.

use std::time::Duration;

use compandauth::{Caa, CaaConfig, CaaState, SessionToken, Strategy};
use compandauth_testkit::{
    counter_revoke_scenarios, counter_window_scenarios, CounterEntity, Session, TimeoutEntity,
};

const START: i64 = 1_700_000_000;

fn grid() -> Vec<(i64, i64)> {
    let mut cases = Vec::new();
    for token in [-1, 0, 1] {
        for window in [-1, 0, 1] {
            cases.push((token, window));
        }
    }
    cases
}

#[test]
fn counter_unissued_is_always_invalid() {
    for (token, delta) in grid() {
        let entity = CounterEntity::new(delta);
        let session = Session::new(SessionToken::new(token));
        assert!(!entity.accepts(&session), "token={token} delta={delta}");
    }
}

#[test]
fn timeout_unissued_is_always_invalid() {
    for (token, secs) in grid() {
        let entity = TimeoutEntity::new(Duration::from_secs(secs.unsigned_abs()), START);
        let session = Session::new(SessionToken::new(token));
        assert!(!entity.accepts(&session), "token={token} secs={secs}");
    }
}

#[test]
fn counter_locked_is_always_invalid() {
    for state in [-1, 1] {
        for (token, delta) in grid() {
            let mut entity = CounterEntity::new(delta);
            entity.caa = CaaConfig::counter(delta).restore(state).unwrap();
            entity.caa.lock();

            let session = Session::new(SessionToken::new(token));
            assert!(!entity.accepts(&session), "state={state} token={token}");
        }
    }
}

#[test]
fn timeout_locked_is_always_invalid() {
    for state in [-START, START] {
        let mut entity = TimeoutEntity::new(Duration::from_secs(30), START);
        entity.caa = CaaConfig::timeout(entity.timeout)
            .restore_with_clock(state, entity.clock.clone())
            .unwrap();
        entity.caa.lock();

        for token in [-START, START, START + 1] {
            let session = Session::new(SessionToken::new(token));
            assert!(!entity.accepts(&session), "state={state} token={token}");
        }
    }
}

#[test]
fn counter_only_last_delta_sessions_are_valid() {
    for (delta, n) in counter_window_scenarios() {
        let mut entity = CounterEntity::new(delta);
        let mut sessions = Vec::new();

        for _ in 0..n {
            sessions.push(entity.login());

            let issued = sessions.len();
            for (j, session) in sessions.iter().enumerate() {
                let expected = (issued - j) as i64 <= delta;
                assert_eq!(entity.accepts(session), expected, "delta={delta} j={j}");
            }
        }
    }
}

#[test]
fn counter_revokes_oldest_sessions() {
    for scenario in counter_revoke_scenarios() {
        let (entity, sessions) = scenario.run();
        let first_valid = scenario.first_valid();

        assert!(sessions[first_valid..].iter().all(|s| entity.accepts(s)), "{scenario:?}");
        assert!(!sessions[..first_valid].iter().any(|s| entity.accepts(s)), "{scenario:?}");
    }
}

#[test]
fn timeout_sessions_only_valid_for_duration() {
    let mut entity = TimeoutEntity::new(Duration::from_secs(30), START);
    let end = START + 120;
    let mut sessions = Vec::new();

    while entity.now() < end {
        sessions.push(entity.login());

        for session in &sessions {
            assert_eq!(entity.accepts(session), !entity.is_expired(session));
        }
        entity.clock.advance(1);
    }
}

#[test]
fn timeout_revokes_sessions_before_timestamp() {
    let mut entity = TimeoutEntity::new(Duration::from_secs(30), START);
    let sessions = entity.login_every_second_until(START + 120);
    let cutoff = START + 50;

    entity.revoke(cutoff);
    entity.clock.force(START + 60);

    for session in &sessions {
        let issued_at = session.caa.get();
        let expected = issued_at >= cutoff && !entity.is_expired(session);
        assert_eq!(entity.accepts(session), expected, "issued_at={issued_at}");
    }
}

#[test]
fn timeout_revoke_to_now_invalidates_everything() {
    let mut entity = TimeoutEntity::new(Duration::from_secs(3600), START);
    let sessions = entity.login_every_second_until(START + 10);

    let now = entity.now();
    entity.revoke(now);

    assert!(sessions.iter().all(|s| !entity.accepts(s)));
    let fresh = entity.login();
    assert!(entity.accepts(&fresh));
}

#[test]
fn lock_is_a_kill_switch_for_both_strategies() {
    let mut counter = CounterEntity::new(5);
    let counter_sessions = counter.login_many(5);

    let mut timeout = TimeoutEntity::new(Duration::from_secs(30), START);
    let timeout_sessions = timeout.login_every_second_until(START + 5);

    counter.caa.lock();
    timeout.caa.lock();
    assert!(counter_sessions.iter().all(|s| !counter.accepts(s)));
    assert!(timeout_sessions.iter().all(|s| !timeout.accepts(s)));

    counter.caa.unlock();
    timeout.caa.unlock();
    assert!(counter_sessions.iter().all(|s| counter.accepts(s)));
    assert!(timeout_sessions.iter().all(|s| timeout.accepts(s)));
}

#[test]
fn state_survives_a_persistence_roundtrip() {
    let config = CaaConfig::counter(3);
    let mut entity = CounterEntity::new(config.window);
    let sessions = entity.login_many(4);
    entity.caa.lock();

    let stored = serde_json::to_string(&entity.caa.state()).unwrap();
    assert_eq!(stored, "-4");

    let state: CaaState = serde_json::from_str(&stored).unwrap();
    let mut restored = config.restore(state.encode()).unwrap();
    assert_eq!(restored.strategy(), Strategy::Counter);
    assert!(restored.is_locked());

    restored.unlock();
    let verdicts: Vec<_> = sessions.iter().map(|s| config.is_valid(&restored, s.caa)).collect();
    assert_eq!(verdicts, vec![false, true, true, true]);
}
