//! # Compandauth
//!
//! Compare-and-authenticate (CAA): decide whether a distributed session is
//! still valid, and revoke whole ranges of sessions, from one integer stored
//! with the entity that owns them.
//!
//! ## Overview
//!
//! Each entity (typically a user record) carries a CAA. When a session is
//! created, [`Caa::issue`] mints a token that the caller embeds in the session
//! (a JWT claim, a cookie). When the session comes back, [`Caa::is_valid`]
//! compares that token against the entity's current CAA. Nothing per-session
//! is ever stored.
//!
//! ## Strategies
//!
//! - **Counter**: the last N issued sessions are valid. Revoking `n` drops the
//!   oldest `n` of them.
//! - **Timeout**: sessions are valid for N seconds after issuance. Revoking to
//!   a timestamp drops every session issued before it.
//!
//! Both can be locked and unlocked, which rejects or re-admits every session
//! at once without changing which ones the arithmetic would accept.
//!
//! ## Usage
//!
//! ```rust
//! use compandauth::{Caa, CaaConfig};
//!
//! let config = CaaConfig::counter(3);
//! let mut caa = config.build();
//!
//! let token = caa.issue();
//! assert!(config.is_valid(&caa, token));
//!
//! // Revoke every outstanding session.
//! caa.revoke(config.window);
//! assert!(!config.is_valid(&caa, token));
//!
//! // Persist the state alongside the entity.
//! let stored: i64 = caa.state().encode();
//! let caa = config.restore(stored).unwrap();
//! assert!(caa.has_issued());
//! ```
//!
//! ## Re-exports
//!
//! - `compandauth::core` - Core primitives (strategies, state, clock)

pub mod config;
pub mod error;
pub mod strategy;
pub mod threadsafe;

// Re-export component crates
pub use compandauth_core as core;

pub use config::CaaConfig;
pub use error::{CaaError, Result};
pub use strategy::{AnyCaa, Strategy};
pub use threadsafe::ThreadSafe;

// Re-export commonly used core types
pub use compandauth_core::{
    abs, to_seconds, Caa, CaaState, Clock, CounterCaa, ManualClock, SessionToken, StateError,
    SystemClock, TimeoutCaa,
};
