//! Time sources for the timeout strategy.
//!
//! The timeout strategy never reads the system clock directly; it is handed a
//! [`Clock`] at construction. Production code uses [`SystemClock`]. Tests use
//! [`ManualClock`], which can be pinned to an instant, stepped forward, and
//! released back to real time.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current time, in UTC Unix seconds.
pub trait Clock: Send + Sync {
    fn now_unix_secs(&self) -> i64;
}

/// Current Unix time in seconds.
///
/// Returns 0 if the system clock is set before the epoch.
#[inline]
pub fn current_time_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_unix_secs(&self) -> i64 {
        current_time_secs()
    }
}

/// A clock that can be forced to a fixed instant for deterministic tests.
///
/// Until [`force`](Self::force) is called (or after [`reset`](Self::reset)),
/// it reports real time.
#[derive(Debug, Default)]
pub struct ManualClock {
    forced: AtomicBool,
    now: AtomicI64,
}

impl ManualClock {
    /// A clock that tracks real time until forced.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock pinned at `secs`.
    pub fn fixed(secs: i64) -> Self {
        let clock = Self::new();
        clock.force(secs);
        clock
    }

    /// A clock pinned at `secs`, ready to share with a strategy.
    pub fn shared(secs: i64) -> Arc<Self> {
        Arc::new(Self::fixed(secs))
    }

    /// Pin the clock at `secs`.
    pub fn force(&self, secs: i64) {
        self.now.store(secs, Ordering::SeqCst);
        self.forced.store(true, Ordering::SeqCst);
    }

    /// Move the pinned instant forward by `secs`. Pins at the current real
    /// time first if the clock is not already forced.
    pub fn advance(&self, secs: i64) {
        let base = self.now_unix_secs();
        self.force(base.saturating_add(secs));
    }

    /// Go back to reporting real time.
    pub fn reset(&self) {
        self.forced.store(false, Ordering::SeqCst);
    }

    pub fn is_forced(&self) -> bool {
        self.forced.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now_unix_secs(&self) -> i64 {
        if self.is_forced() {
            self.now.load(Ordering::SeqCst)
        } else {
            current_time_secs()
        }
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now_unix_secs(&self) -> i64 {
        (**self).now_unix_secs()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_unix_secs(&self) -> i64 {
        (**self).now_unix_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_epoch() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_unix_secs() > 1_577_836_800);
    }

    #[test]
    fn test_manual_clock_force_and_advance() {
        let clock = ManualClock::fixed(1_000);
        assert_eq!(clock.now_unix_secs(), 1_000);

        clock.advance(30);
        assert_eq!(clock.now_unix_secs(), 1_030);

        clock.force(5);
        assert_eq!(clock.now_unix_secs(), 5);
    }

    #[test]
    fn test_manual_clock_reset_returns_to_real_time() {
        let clock = ManualClock::fixed(1);
        assert!(clock.is_forced());

        clock.reset();
        assert!(!clock.is_forced());
        assert!(clock.now_unix_secs() > 1_577_836_800);
    }

    #[test]
    fn test_shared_clock_is_seen_through_arc() {
        let clock = ManualClock::shared(10);
        let handle: Arc<dyn Clock> = clock.clone();

        clock.advance(5);
        assert_eq!(handle.now_unix_secs(), 15);
    }
}
