//! Proptest generators for property-based testing.

use proptest::prelude::*;

use compandauth::{CaaConfig, CaaState, SessionToken, Strategy as CaaStrategy};

/// Any encodable state, locked, unlocked or unissued.
pub fn caa_state() -> impl Strategy<Value = CaaState> {
    ((i64::MIN + 1)..=i64::MAX).prop_map(|v| CaaState::decode(v).unwrap())
}

/// An issued state with room left to issue.
pub fn issued_state() -> impl Strategy<Value = CaaState> {
    (1i64..=1_000_000, any::<bool>()).prop_map(|(frontier, locked)| CaaState::new(frontier, locked))
}

/// A token of either sign.
pub fn session_token() -> impl Strategy<Value = SessionToken> {
    any::<i64>().prop_map(SessionToken::new)
}

/// A window of either sign; the strategies normalize it.
pub fn window() -> impl Strategy<Value = i64> {
    -10_000i64..=10_000
}

/// A plausible Unix timestamp in seconds (2001 to 2033).
pub fn timestamp() -> impl Strategy<Value = i64> {
    1_000_000_000i64..=2_000_000_000
}

pub fn caa_strategy() -> impl Strategy<Value = CaaStrategy> {
    prop_oneof![Just(CaaStrategy::Counter), Just(CaaStrategy::Timeout)]
}

/// A valid configuration.
pub fn caa_config() -> impl Strategy<Value = CaaConfig> {
    (caa_strategy(), 0i64..=10_000).prop_map(|(strategy, window)| CaaConfig { strategy, window })
}

/// Parameters for a counter issuance history.
#[derive(Debug, Clone)]
pub struct CounterParams {
    pub delta: i64,
    pub sessions: usize,
    pub revoke: i64,
}

impl Arbitrary for CounterParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0i64..=50, 0usize..=200, 0i64..=60)
            .prop_map(|(delta, sessions, revoke)| CounterParams {
                delta,
                sessions,
                revoke,
            })
            .boxed()
    }
}
