//! Explicit client-side cache entry.
//!
//! Replaces the old pattern of stashing fetched statistics in shared browser
//! storage with an implicit freshness window: the cached value, its fetch
//! time, and its time-to-live travel together, and freshness is a pure
//! predicate over a supplied clock.

use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TTL_SECS: i64 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl<T> Cached<T> {
    pub fn new(data: T, fetched_at: DateTime<Utc>) -> Self {
        Cached {
            data,
            fetched_at,
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
        }
    }

    pub fn with_ttl(data: T, fetched_at: DateTime<Utc>, ttl: Duration) -> Self {
        Cached {
            data,
            fetched_at,
            ttl,
        }
    }

    /// Fresh while strictly less than `ttl` has elapsed. A clock that moved
    /// backwards reads as fresh rather than forcing a refetch loop.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_fresh_within_ttl() {
        let cached = Cached::new(42u32, at(0));
        assert!(cached.is_fresh(at(0)));
        assert!(cached.is_fresh(at(299)));
    }

    #[test]
    fn test_stale_at_ttl_boundary() {
        let cached = Cached::new(42u32, at(0));
        assert!(!cached.is_fresh(at(300)));
        assert!(!cached.is_fresh(at(4000)));
    }

    #[test]
    fn test_backwards_clock_reads_fresh() {
        let cached = Cached::new(42u32, at(100));
        assert!(cached.is_fresh(at(0)));
    }

    #[test]
    fn test_custom_ttl() {
        let cached = Cached::with_ttl("stats", at(0), Duration::seconds(10));
        assert!(cached.is_fresh(at(9)));
        assert!(!cached.is_fresh(at(10)));
    }
}
