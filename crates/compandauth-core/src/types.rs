//! Strong type definitions for compandauth.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::abs;

/// The value minted by `issue` and carried inside a session.
///
/// For the counter strategy this is the frontier at issuance; for the timeout
/// strategy it is the issuance time in Unix seconds. The caller stores it
/// verbatim (e.g. in a JWT claim) and hands it back at validation time. Only
/// the magnitude is meaningful.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub i64);

impl SessionToken {
    /// Wrap a raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw value, sign included.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The sign-normalized value used in comparisons.
    pub const fn magnitude(self) -> i64 {
        abs(self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.0)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SessionToken {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SessionToken> for i64 {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_magnitude_ignores_sign() {
        assert_eq!(SessionToken::new(-7).magnitude(), 7);
        assert_eq!(SessionToken::new(7).magnitude(), 7);
        assert_eq!(SessionToken::new(i64::MIN).magnitude(), i64::MAX);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", SessionToken::new(-42)), "-42");
        assert_eq!(format!("{:?}", SessionToken::new(3)), "SessionToken(3)");
    }

    #[test]
    fn test_token_serializes_as_bare_integer() {
        let json = serde_json::to_string(&SessionToken::new(1_700_000_000)).unwrap();
        assert_eq!(json, "1700000000");

        let token: SessionToken = serde_json::from_str("-12").unwrap();
        assert_eq!(token, SessionToken::new(-12));
    }
}
