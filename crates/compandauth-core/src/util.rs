//! Integer helpers shared by both strategies.

use std::time::Duration;

/// Absolute value that saturates instead of overflowing.
///
/// `i64::MIN` has no positive counterpart, so it maps to `i64::MAX`. Every
/// caller-supplied token, delta, duration and timestamp goes through here
/// before it is compared against a frontier.
#[inline]
pub const fn abs(n: i64) -> i64 {
    n.saturating_abs()
}

/// Convert a [`Duration`] into whole seconds, truncating any fraction.
///
/// Durations longer than `i64::MAX` seconds saturate.
#[inline]
pub fn to_seconds(d: Duration) -> i64 {
    i64::try_from(d.as_secs()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(0), 0);
        assert_eq!(abs(5), 5);
        assert_eq!(abs(-5), 5);
        assert_eq!(abs(i64::MAX), i64::MAX);
        assert_eq!(abs(-i64::MAX), i64::MAX);
        assert_eq!(abs(i64::MIN), i64::MAX);
    }

    #[test]
    fn test_to_seconds_truncates() {
        assert_eq!(to_seconds(Duration::from_secs(30)), 30);
        assert_eq!(to_seconds(Duration::from_millis(1999)), 1);
        assert_eq!(to_seconds(Duration::from_millis(999)), 0);
        assert_eq!(to_seconds(Duration::from_secs(2 * 60)), 120);
    }

    #[test]
    fn test_to_seconds_saturates() {
        assert_eq!(to_seconds(Duration::MAX), i64::MAX);
    }
}
