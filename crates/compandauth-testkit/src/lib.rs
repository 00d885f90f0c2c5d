//! # Compandauth Testkit
//!
//! Testing utilities for compandauth.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Example entities and sessions wired to a CAA
//! - **Scenarios**: Issuance/revocation tables with their expected verdicts
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! ```rust
//! use compandauth_testkit::fixtures::CounterEntity;
//!
//! let mut entity = CounterEntity::new(5);
//! let sessions = entity.login_many(10);
//!
//! assert!(!entity.accepts(&sessions[4]));
//! assert!(entity.accepts(&sessions[5]));
//! ```
//!
//! ## Scenarios
//!
//! ```rust
//! use compandauth_testkit::scenarios::counter_revoke_scenarios;
//!
//! for scenario in counter_revoke_scenarios() {
//!     assert!(scenario.holds(), "{scenario:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use compandauth_testkit::generators::{session_token, window};
//! use compandauth::{Caa, CounterCaa};
//!
//! proptest! {
//!     #[test]
//!     fn unissued_rejects_everything(token in session_token(), window in window()) {
//!         prop_assert!(!CounterCaa::new().is_valid(token, window));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod scenarios;

pub use fixtures::{CounterEntity, Session, TimeoutEntity};
pub use generators::CounterParams;
pub use scenarios::{counter_revoke_scenarios, counter_window_scenarios, RevokeScenario};
