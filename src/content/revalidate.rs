// SPDX-License-Identifier: MPL-2.0
//! Cached-catalog freshness.
//!
//! A fetched catalog is reused until it is older than the revalidation
//! interval. There is no background polling: staleness is only checked when
//! the visitor asks for a refresh.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    fetched_at: Option<Instant>,
    max_age: Duration,
}

impl Freshness {
    #[must_use]
    pub fn new(max_age: Duration) -> Self {
        Self {
            fetched_at: None,
            max_age,
        }
    }

    pub fn mark_fetched(&mut self, now: Instant) {
        self.fetched_at = Some(now);
    }

    /// Never-fetched counts as stale.
    #[must_use]
    pub fn is_stale(&self, now: Instant) -> bool {
        self.fetched_at
            .is_none_or(|at| now.saturating_duration_since(at) >= self.max_age)
    }

    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_until_max_age() {
        let start = Instant::now();
        let mut freshness = Freshness::new(Duration::from_secs(60));
        assert!(freshness.is_stale(start));

        freshness.mark_fetched(start);
        assert!(!freshness.is_stale(start + Duration::from_secs(59)));
        assert!(freshness.is_stale(start + Duration::from_secs(60)));
    }
}
