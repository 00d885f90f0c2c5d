//! The per-entity CAA state record.
//!
//! A CAA is, at rest, one signed integer: the sign says whether the entity is
//! locked and the magnitude is the frontier. In memory we keep the two facts
//! apart as [`CaaState`] and only fold them back together in
//! [`CaaState::encode`], so nothing here relies on the sign of zero.
//!
//! ## Invariants
//!
//! - `frontier >= 0`.
//! - `frontier == 0` means unissued, and an unissued state is never locked.
//! - `lock`/`unlock` never touch the frontier.

use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::util::abs;

/// Lock flag plus frontier, owned by exactly one entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CaaState {
    frontier: i64,
    locked: bool,
}

impl CaaState {
    /// The unissued state every entity starts in.
    pub const UNISSUED: Self = Self {
        frontier: 0,
        locked: false,
    };

    /// Create a state from parts. A negative frontier is normalized.
    pub const fn new(frontier: i64, locked: bool) -> Self {
        let frontier = abs(frontier);
        Self {
            frontier,
            locked: locked && frontier != 0,
        }
    }

    /// An unlocked state at `frontier`.
    pub const fn unlocked(frontier: i64) -> Self {
        Self::new(frontier, false)
    }

    /// A locked state at `frontier`.
    pub const fn locked(frontier: i64) -> Self {
        Self::new(frontier, true)
    }

    /// The frontier (magnitude of the encoded value).
    pub const fn frontier(&self) -> i64 {
        self.frontier
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether anything has ever been issued against this state.
    pub const fn has_issued(&self) -> bool {
        self.frontier != 0
    }

    /// Lock the state. No-op while unissued.
    pub fn lock(&mut self) {
        self.locked = self.has_issued();
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Move the frontier forward by `n`, keeping the lock.
    ///
    /// Saturates at `i64::MAX`.
    pub fn advance(&mut self, n: i64) {
        self.frontier = self.frontier.saturating_add(abs(n));
    }

    /// Replace the frontier outright, keeping the lock.
    ///
    /// Rebasing to zero returns the state to unissued.
    pub fn rebase(&mut self, frontier: i64) {
        *self = Self::new(frontier, self.locked);
    }

    /// Fold into the compact signed form: negative when locked.
    pub const fn encode(&self) -> i64 {
        if self.locked {
            -self.frontier
        } else {
            self.frontier
        }
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn decode(value: i64) -> Result<Self, StateError> {
        if value == i64::MIN {
            return Err(StateError::OutOfRange(value));
        }
        Ok(Self::new(value, value < 0))
    }
}

impl TryFrom<i64> for CaaState {
    type Error = StateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl From<CaaState> for i64 {
    fn from(state: CaaState) -> Self {
        state.encode()
    }
}
