// SPDX-License-Identifier: MPL-2.0
//! Cancelable deadlines owned by a component.
//!
//! Nothing here sleeps. A [`TimerSet`] records *when* each kind of timer is
//! due; the owner feeds the current instant into [`TimerSet::pop_due`] from
//! its tick handler. Dropping the set (or calling [`TimerSet::cancel_all`])
//! cancels every pending timer, so no callback can outlive its owner.

use std::time::Instant;

/// At most one pending deadline per timer kind.
#[derive(Debug, Clone)]
pub struct TimerSet<K> {
    deadlines: Vec<(K, Instant)>,
}

impl<K> Default for TimerSet<K> {
    fn default() -> Self {
        Self {
            deadlines: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> TimerSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `kind` to fire at `at`, replacing any earlier arming.
    pub fn schedule(&mut self, kind: K, at: Instant) {
        self.cancel(kind);
        self.deadlines.push((kind, at));
    }

    /// Returns `true` if a pending timer was removed.
    pub fn cancel(&mut self, kind: K) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|(k, _)| *k != kind);
        self.deadlines.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    #[must_use]
    pub fn is_scheduled(&self, kind: K) -> bool {
        self.deadlines.iter().any(|(k, _)| *k == kind)
    }

    #[must_use]
    pub fn deadline(&self, kind: K) -> Option<Instant> {
        self.deadlines
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, at)| *at)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|(_, at)| *at).min()
    }

    /// Removes and returns the earliest timer due at `now`.
    ///
    /// Call repeatedly until it returns `None`: firing one timer may arm
    /// another that is already due.
    pub fn pop_due(&mut self, now: Instant) -> Option<K> {
        let (pos, _) = self
            .deadlines
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= now)
            .min_by_key(|(_, (_, at))| *at)?;
        Some(self.deadlines.swap_remove(pos).0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        A,
        B,
    }

    #[test]
    fn schedule_replaces_same_kind() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(Kind::A, start + Duration::from_secs(5));
        timers.schedule(Kind::A, start + Duration::from_secs(1));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.deadline(Kind::A), Some(start + Duration::from_secs(1)));
    }

    #[test]
    fn pop_due_fires_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(Kind::B, start + Duration::from_millis(20));
        timers.schedule(Kind::A, start + Duration::from_millis(10));

        let now = start + Duration::from_millis(30);
        assert_eq!(timers.pop_due(now), Some(Kind::A));
        assert_eq!(timers.pop_due(now), Some(Kind::B));
        assert_eq!(timers.pop_due(now), None);
    }

    #[test]
    fn pending_timer_is_not_due_early() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(Kind::A, start + Duration::from_millis(10));
        assert_eq!(timers.pop_due(start), None);
        assert!(timers.is_scheduled(Kind::A));
    }

    #[test]
    fn cancel_all_clears_everything() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.schedule(Kind::A, start);
        timers.schedule(Kind::B, start);
        timers.cancel_all();
        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn cancel_reports_removal() {
        let mut timers = TimerSet::new();
        timers.schedule(Kind::A, Instant::now());
        assert!(timers.cancel(Kind::A));
        assert!(!timers.cancel(Kind::A));
    }
}
