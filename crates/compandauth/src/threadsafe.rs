//! Shared access to one entity's CAA.
//!
//! Only needed when the task that loaded an entity fans work out to other
//! threads or tasks that all touch the same CAA, e.g. a request handler that
//! issues several sessions in parallel. Everything else can hold the strategy
//! directly.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use compandauth_core::{Caa, CaaState, SessionToken};

/// A CAA behind a reader/writer lock.
///
/// Validation and the other queries share the read lock; `lock`, `unlock`,
/// `revoke` and `issue` take the write lock. One wrapper guards one entity.
/// Share it with `Arc`.
#[derive(Debug, Default)]
pub struct ThreadSafe<C> {
    inner: RwLock<C>,
}

impl<C: Caa> ThreadSafe<C> {
    pub fn new(caa: C) -> Self {
        Self {
            inner: RwLock::new(caa),
        }
    }

    pub fn lock(&self) {
        self.write().lock();
        tracing::debug!("caa locked");
    }

    pub fn unlock(&self) {
        self.write().unlock();
        tracing::debug!("caa unlocked");
    }

    pub fn is_locked(&self) -> bool {
        self.read().is_locked()
    }

    pub fn is_valid(&self, token: SessionToken, window: i64) -> bool {
        self.read().is_valid(token, window)
    }

    pub fn revoke(&self, n: i64) {
        let state = {
            let mut caa = self.write();
            caa.revoke(n);
            caa.state()
        };
        tracing::debug!(n, frontier = state.frontier(), "caa revoked");
    }

    pub fn issue(&self) -> SessionToken {
        self.write().issue()
    }

    pub fn has_issued(&self) -> bool {
        self.read().has_issued()
    }

    /// A consistent snapshot of the state, for persisting.
    pub fn state(&self) -> CaaState {
        self.read().state()
    }

    /// Take the strategy back out.
    pub fn into_inner(self) -> C {
        self.inner.into_inner().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering caa from poisoned lock");
            poisoned.into_inner()
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, C> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering caa from poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, C> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering caa from poisoned lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl<C: Caa> From<C> for ThreadSafe<C> {
    fn from(caa: C) -> Self {
        Self::new(caa)
    }
}
