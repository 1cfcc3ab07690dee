//! Remaining-byte quota reported by the service.

use std::fmt;

/// Bytes of true randomness the service will still hand out.
///
/// Negative means requests are refused until the daily top-up.
/// `Quota::UNKNOWN` (-1) stands in when the quota could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quota(pub i64);

impl Quota {
    /// Placeholder for a failed quota check.
    pub const UNKNOWN: Quota = Quota(-1);

    /// Parse the service's plain-text body: a bare, possibly signed integer.
    pub fn parse(body: &str) -> Option<Quota> {
        body.trim().parse::<i64>().ok().map(Quota)
    }

    /// Whether remote requests should be skipped.
    pub fn is_exhausted(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_body() {
        assert_eq!(Quota::parse("1000000\n"), Some(Quota(1_000_000)));
        assert_eq!(Quota::parse("-2048"), Some(Quota(-2048)));
        assert_eq!(Quota::parse("<html>"), None);
        assert_eq!(Quota::parse(""), None);
    }

    #[test]
    fn exhausted_when_negative() {
        assert!(Quota(-1).is_exhausted());
        assert!(Quota::UNKNOWN.is_exhausted());
        assert!(!Quota(0).is_exhausted());
        assert!(!Quota(20_000).is_exhausted());
    }
}
