//! # Compandauth Core
//!
//! Pure primitives for compare-and-authenticate (CAA): validating and revoking
//! any number of distributed sessions from one integer of per-entity state.
//!
//! This crate contains no I/O, no storage, no logging. The only outside input
//! is the [`Clock`] handed to the timeout strategy.
//!
//! ## Key Types
//!
//! - [`Caa`] - The capability set: lock, unlock, issue, validate, revoke
//! - [`CounterCaa`] - Valid over the last N issuances
//! - [`TimeoutCaa`] - Valid for N seconds after issuance, from an anchor on
//! - [`CaaState`] - Lock flag plus frontier; persisted as one signed integer
//! - [`SessionToken`] - The value carried inside each session
//!
//! ## Usage
//!
//! ```rust
//! use compandauth_core::{Caa, CounterCaa};
//!
//! let mut caa = CounterCaa::new();
//! let token = caa.issue();
//! assert!(caa.is_valid(token, 5));
//!
//! caa.lock();
//! assert!(!caa.is_valid(token, 5));
//! ```

pub mod caa;
pub mod clock;
pub mod counter;
pub mod error;
pub mod state;
pub mod timeout;
pub mod types;
pub mod util;

pub use caa::Caa;
pub use clock::{current_time_secs, Clock, ManualClock, SystemClock};
pub use counter::CounterCaa;
pub use error::StateError;
pub use state::CaaState;
pub use timeout::TimeoutCaa;
pub use types::SessionToken;
pub use util::{abs, to_seconds};
