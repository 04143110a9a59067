// SPDX-License-Identifier: MPL-2.0
//! Navigation queue and transition sequencer.
//!
//! Every navigation request, whether it comes from a click, a key, a swipe or
//! the auto-advance timer, goes through one FIFO. A single consumer drains it:
//! while a transition is in flight nothing else starts, and when it completes
//! the next entry is popped. Entries equal to the current artwork (or unknown
//! to the catalog) are skipped without a transition.
//!
//! A transition is:
//!
//! 1. `current` switches to the target right away, so the sidebar metadata
//!    updates ahead of the image;
//! 2. the target is written into the hidden crossfade layer;
//! 3. after the flip delay the hidden layer becomes visible;
//! 4. after the crossfade duration the in-flight lock is released and the
//!    queue continues.
//!
//! All waits are deadlines in a [`TimerSet`]; the owner calls
//! [`Sequencer::tick`] with the current instant.

use super::crossfade::Crossfade;
use super::timers::TimerSet;
use crate::domain::{ArtworkId, Catalog};
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

/// Durations of the transition and auto-advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between writing the hidden layer and flipping it visible.
    pub flip_delay: Duration,
    /// Opacity animation length.
    pub crossfade: Duration,
    /// Idle time before auto-advance moves to the next artwork.
    pub auto_advance: Duration,
    /// How long a manual navigation suppresses auto-advance.
    pub manual_pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_delay: Duration::from_millis(50),
            crossfade: Duration::from_millis(300),
            auto_advance: Duration::from_secs(4),
            manual_pause: Duration::from_secs(10),
        }
    }
}

/// Who asked for a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The visitor (click, key, swipe, list selection).
    Manual,
    /// The auto-advance timer.
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Flip,
    Complete,
    AutoAdvance,
    PauseExpiry,
}

/// Observable outcomes of a sequencer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A transition started; `current` is now this artwork.
    Show(ArtworkId),
    /// The queue is empty and no transition is in flight.
    Settled,
}

/// View-state controller of one gallery mount.
#[derive(Debug, Clone)]
pub struct Sequencer {
    known: HashSet<ArtworkId>,
    order: Vec<ArtworkId>,
    current: Option<ArtworkId>,
    queue: VecDeque<ArtworkId>,
    in_flight: bool,
    crossfade: Crossfade,
    auto_advance: bool,
    paused_until: Option<Instant>,
    timers: TimerSet<TimerKind>,
    timing: Timing,
}

impl Sequencer {
    /// Mounts on `catalog` with the first artwork current.
    #[must_use]
    pub fn new(catalog: &Catalog, timing: Timing, auto_advance: bool, now: Instant) -> Self {
        let current = catalog.first().map(|a| a.id().clone());
        let mut sequencer = Self {
            known: catalog.ids().cloned().collect(),
            order: catalog.ids().cloned().collect(),
            current: current.clone(),
            queue: VecDeque::new(),
            in_flight: false,
            crossfade: Crossfade::new(current, timing.crossfade),
            auto_advance,
            paused_until: None,
            timers: TimerSet::new(),
            timing,
        };
        sequencer.arm_auto_advance(now);
        sequencer
    }

    #[must_use]
    pub fn current(&self) -> Option<&ArtworkId> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Requests still waiting behind the in-flight transition.
    #[must_use]
    pub fn pending(&self) -> &VecDeque<ArtworkId> {
        &self.queue
    }

    #[must_use]
    pub fn crossfade(&self) -> &Crossfade {
        &self.crossfade
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance
    }

    /// Whether a manual navigation is currently holding auto-advance back.
    #[must_use]
    pub fn is_paused(&self, now: Instant) -> bool {
        self.paused_until.is_some_and(|until| now < until)
    }

    /// Earliest pending deadline; `None` means nothing to tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Whether a transition deadline is pending (needs frame-rate ticks).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.timers.is_scheduled(TimerKind::Flip) || self.timers.is_scheduled(TimerKind::Complete)
    }

    /// The visible list that next/previous walk through.
    #[must_use]
    pub fn order(&self) -> &[ArtworkId] {
        &self.order
    }

    /// Replaces the visible list (after a filter change).
    ///
    /// Unknown ids are ignored. The auto-advance timer restarts from `now`.
    pub fn set_order(&mut self, order: Vec<ArtworkId>, now: Instant) {
        self.order = order
            .into_iter()
            .filter(|id| self.known.contains(id))
            .collect();
        self.arm_auto_advance(now);
    }

    /// Enqueues `target` unless it is already current.
    pub fn request_navigate(
        &mut self,
        target: ArtworkId,
        trigger: Trigger,
        now: Instant,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.current.as_ref() == Some(&target) {
            tracing::debug!(%target, "ignoring navigation to current artwork");
            return effects;
        }

        self.queue.push_back(target);
        if trigger == Trigger::Manual {
            self.pause_auto_advance(now);
        }
        self.drain(now, &mut effects);
        effects
    }

    /// Requests the artwork after `current` in the visible list, wrapping.
    pub fn next(&mut self, trigger: Trigger, now: Instant) -> Vec<Effect> {
        match self.neighbour(1) {
            Some(target) => self.request_navigate(target, trigger, now),
            None => Vec::new(),
        }
    }

    /// Requests the artwork before `current` in the visible list, wrapping.
    pub fn previous(&mut self, trigger: Trigger, now: Instant) -> Vec<Effect> {
        match self.neighbour(-1) {
            Some(target) => self.request_navigate(target, trigger, now),
            None => Vec::new(),
        }
    }

    /// Forced transition used by filter changes.
    ///
    /// Abandons the in-flight transition and every queued request, then shows
    /// `target` at once. Jumping to the artwork that is already current and
    /// visible produces no transition; the caller still resets its loading
    /// state.
    pub fn jump_to(&mut self, target: ArtworkId, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.known.contains(&target) {
            tracing::debug!(%target, "ignoring jump to unknown artwork");
            return effects;
        }

        let dropped = self.queue.len();
        self.queue.clear();
        self.timers.cancel(TimerKind::Flip);
        self.timers.cancel(TimerKind::Complete);
        self.crossfade.settle();
        self.in_flight = false;
        if dropped > 0 {
            tracing::debug!(dropped, "jump discarded queued navigation requests");
        }

        self.pause_auto_advance(now);
        // A transition abandoned before its flip leaves `current` staged but
        // hidden, so the visible layer has to be checked too.
        let visible = self.crossfade.artwork(self.crossfade.active());
        if self.current.as_ref() == Some(&target) && visible == Some(&target) {
            effects.push(Effect::Settled);
        } else {
            self.begin(target, now, &mut effects);
        }
        effects
    }

    /// Fires every deadline due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(kind) = self.timers.pop_due(now) {
            match kind {
                TimerKind::Flip => {
                    self.crossfade.flip(now);
                    self.timers
                        .schedule(TimerKind::Complete, now + self.timing.crossfade);
                }
                TimerKind::Complete => {
                    self.crossfade.settle();
                    self.in_flight = false;
                    self.drain(now, &mut effects);
                }
                TimerKind::PauseExpiry => {
                    self.paused_until = None;
                    self.arm_auto_advance(now);
                }
                TimerKind::AutoAdvance => {
                    match self.neighbour(1) {
                        Some(target) if self.current.as_ref() != Some(&target) => {
                            self.queue.push_back(target);
                            self.drain(now, &mut effects);
                        }
                        // Single-item view: nothing to advance to, try later.
                        _ => self.arm_auto_advance(now),
                    }
                }
            }
        }
        effects
    }

    pub fn set_auto_advance(&mut self, enabled: bool, now: Instant) {
        if self.auto_advance == enabled {
            return;
        }
        self.auto_advance = enabled;
        if enabled {
            self.arm_auto_advance(now);
        } else {
            self.timers.cancel(TimerKind::AutoAdvance);
        }
        tracing::debug!(enabled, "auto-advance toggled");
    }

    /// Flips auto-advance and returns the new state.
    pub fn toggle_auto_advance(&mut self, now: Instant) -> bool {
        self.set_auto_advance(!self.auto_advance, now);
        self.auto_advance
    }

    /// Cancels every deadline and drops pending requests.
    ///
    /// The visible state stays where it is; nothing fires afterwards.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.queue.clear();
        self.in_flight = false;
        self.paused_until = None;
        self.crossfade.settle();
    }

    fn drain(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.in_flight {
            return;
        }
        while let Some(target) = self.queue.pop_front() {
            if self.current.as_ref() == Some(&target) {
                tracing::debug!(%target, "dropping queued duplicate of current artwork");
                continue;
            }
            if !self.known.contains(&target) {
                tracing::debug!(%target, "dropping queued unknown artwork");
                continue;
            }
            self.begin(target, now, effects);
            return;
        }
        effects.push(Effect::Settled);
        self.arm_auto_advance(now);
    }

    fn begin(&mut self, target: ArtworkId, now: Instant, effects: &mut Vec<Effect>) {
        self.in_flight = true;
        self.timers.cancel(TimerKind::AutoAdvance);
        self.current = Some(target.clone());
        self.crossfade.stage(target.clone());
        self.timers
            .schedule(TimerKind::Flip, now + self.timing.flip_delay);
        effects.push(Effect::Show(target));
    }

    fn pause_auto_advance(&mut self, now: Instant) {
        let until = now + self.timing.manual_pause;
        self.paused_until = Some(until);
        self.timers.cancel(TimerKind::AutoAdvance);
        self.timers.schedule(TimerKind::PauseExpiry, until);
    }

    /// (Re)starts the auto-advance countdown when nothing blocks it.
    fn arm_auto_advance(&mut self, now: Instant) {
        self.timers.cancel(TimerKind::AutoAdvance);
        let blocked = !self.auto_advance
            || self.in_flight
            || !self.queue.is_empty()
            || self.is_paused(now)
            || self.order.len() < 2;
        if !blocked {
            self.timers
                .schedule(TimerKind::AutoAdvance, now + self.timing.auto_advance);
        }
    }

    fn neighbour(&self, step: isize) -> Option<ArtworkId> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }
        let position = self
            .current
            .as_ref()
            .and_then(|current| self.order.iter().position(|id| id == current));
        let index = match position {
            #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
            Some(pos) => (pos as isize + step).rem_euclid(len as isize) as usize,
            // Current is outside the visible list: enter it at the first item.
            None => 0,
        };
        self.order.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artwork, Year};
    use proptest::prelude::*;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new(
            ids.iter()
                .map(|id| Artwork::builder(*id, *id, Year::new(2024).unwrap(), "img").build())
                .collect(),
        )
    }

    fn id(s: &str) -> ArtworkId {
        ArtworkId::from(s)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Ticks in 10 ms steps until nothing is in flight or queued.
    fn settle(seq: &mut Sequencer, mut now: Instant) -> (Instant, Vec<Effect>) {
        let mut effects = Vec::new();
        while seq.is_in_flight() || !seq.pending().is_empty() {
            now += ms(10);
            effects.extend(seq.tick(now));
        }
        (now, effects)
    }

    #[test]
    fn mounts_on_first_artwork() {
        let seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), false, Instant::now());
        assert_eq!(seq.current(), Some(&id("a")));
        assert!(!seq.is_in_flight());
        assert!(seq.next_deadline().is_none());
    }

    #[test]
    fn empty_catalog_has_no_current() {
        let now = Instant::now();
        let mut seq = Sequencer::new(&Catalog::default(), Timing::default(), true, now);
        assert_eq!(seq.current(), None);
        assert!(seq.next(Trigger::Manual, now).is_empty());
        assert!(seq.next_deadline().is_none());
    }

    #[test]
    fn requesting_current_changes_nothing() {
        let now = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), true, now);
        let deadline = seq.next_deadline();

        let effects = seq.request_navigate(id("a"), Trigger::Manual, now);

        assert!(effects.is_empty());
        assert!(!seq.is_in_flight());
        assert!(seq.pending().is_empty());
        assert!(!seq.is_paused(now));
        assert_eq!(seq.next_deadline(), deadline);
    }

    #[test]
    fn transition_updates_current_before_flip() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), false, start);

        let effects = seq.request_navigate(id("b"), Trigger::Manual, start);
        assert_eq!(effects, vec![Effect::Show(id("b"))]);
        assert_eq!(seq.current(), Some(&id("b")));
        assert!(seq.is_in_flight());
        // Hidden layer staged, not yet visible.
        assert_eq!(seq.crossfade().artwork(seq.crossfade().hidden()), Some(&id("b")));

        assert!(seq.tick(start + ms(49)).is_empty());
        seq.tick(start + ms(50));
        assert_eq!(seq.crossfade().artwork(seq.crossfade().active()), Some(&id("b")));
        assert!(seq.is_in_flight());

        let effects = seq.tick(start + ms(350));
        assert_eq!(effects, vec![Effect::Settled]);
        assert!(!seq.is_in_flight());
    }

    #[test]
    fn overlapping_requests_are_serialized() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), false, start);

        seq.request_navigate(id("b"), Trigger::Manual, start);
        let effects = seq.request_navigate(id("c"), Trigger::Manual, start + ms(5));
        assert!(effects.is_empty(), "second request waits for the first");
        assert_eq!(seq.current(), Some(&id("b")));
        assert_eq!(seq.pending().len(), 1);

        let (_, effects) = settle(&mut seq, start + ms(5));
        assert_eq!(effects, vec![Effect::Show(id("c")), Effect::Settled]);
        assert_eq!(seq.current(), Some(&id("c")));
    }

    #[test]
    fn queued_duplicate_of_current_is_skipped() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), false, start);

        seq.request_navigate(id("b"), Trigger::Manual, start);
        // Already current: dropped at enqueue time.
        assert!(seq.request_navigate(id("b"), Trigger::Manual, start).is_empty());
        assert!(seq.pending().is_empty());

        // Both accepted while "b" is current; the second is a duplicate by the
        // time it is drained.
        seq.request_navigate(id("c"), Trigger::Manual, start);
        seq.request_navigate(id("c"), Trigger::Manual, start);
        assert_eq!(seq.pending().len(), 2);

        let (_, effects) = settle(&mut seq, start);
        assert_eq!(effects, vec![Effect::Show(id("c")), Effect::Settled]);
    }

    #[test]
    fn unknown_targets_are_dropped_silently() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), false, start);

        let effects = seq.request_navigate(id("ghost"), Trigger::Manual, start);
        assert_eq!(effects, vec![Effect::Settled]);
        assert_eq!(seq.current(), Some(&id("a")));
        assert!(!seq.is_in_flight());
    }

    #[test]
    fn next_and_previous_wrap_within_order() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), false, start);

        seq.previous(Trigger::Manual, start);
        assert_eq!(seq.current(), Some(&id("c")));
        let (now, _) = settle(&mut seq, start);

        seq.next(Trigger::Manual, now);
        assert_eq!(seq.current(), Some(&id("a")));
    }

    #[test]
    fn next_enters_filtered_order_at_first_item() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), false, start);
        seq.set_order(vec![id("b"), id("c")], start);

        seq.next(Trigger::Manual, start);
        assert_eq!(seq.current(), Some(&id("b")));
    }

    #[test]
    fn auto_advance_moves_after_interval() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), true, start);

        assert!(seq.tick(start + Duration::from_millis(3999)).is_empty());
        let effects = seq.tick(start + Duration::from_secs(4));
        assert_eq!(effects, vec![Effect::Show(id("b"))]);
    }

    #[test]
    fn manual_navigation_pauses_auto_advance() {
        let start = Instant::now();
        let timing = Timing::default();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), timing, true, start);

        seq.request_navigate(id("b"), Trigger::Manual, start + ms(100));
        let (now, _) = settle(&mut seq, start + ms(100));
        assert!(seq.is_paused(now));

        // Nothing advances during the pause window.
        let before_expiry = start + ms(100) + timing.manual_pause - ms(1);
        assert!(seq.tick(before_expiry).is_empty());
        assert_eq!(seq.current(), Some(&id("b")));

        // After expiry the countdown restarts from scratch.
        let expiry = start + ms(100) + timing.manual_pause;
        assert!(seq.tick(expiry).is_empty());
        let effects = seq.tick(expiry + timing.auto_advance);
        assert_eq!(effects, vec![Effect::Show(id("c"))]);
    }

    #[test]
    fn automatic_navigation_does_not_pause() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), true, start);
        seq.request_navigate(id("b"), Trigger::Automatic, start);
        assert!(!seq.is_paused(start));
    }

    #[test]
    fn disabled_auto_advance_never_fires() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), true, start);
        seq.set_auto_advance(false, start);
        assert!(seq.tick(start + Duration::from_secs(60)).is_empty());
        assert!(seq.toggle_auto_advance(start));
        assert!(seq.next_deadline().is_some());
    }

    #[test]
    fn single_artwork_never_auto_advances() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a"]), Timing::default(), true, start);
        assert!(seq.next_deadline().is_none());
        assert!(seq.next(Trigger::Manual, start).is_empty());
    }

    #[test]
    fn jump_preempts_in_flight_transition() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c", "d"]), Timing::default(), false, start);

        seq.request_navigate(id("b"), Trigger::Manual, start);
        seq.request_navigate(id("c"), Trigger::Manual, start);
        let effects = seq.jump_to(id("d"), start + ms(20));

        assert_eq!(effects, vec![Effect::Show(id("d"))]);
        assert_eq!(seq.current(), Some(&id("d")));
        assert!(seq.pending().is_empty());

        let (_, effects) = settle(&mut seq, start + ms(20));
        assert_eq!(effects, vec![Effect::Settled]);
        assert_eq!(seq.current(), Some(&id("d")));
    }

    #[test]
    fn jump_to_current_settles_without_transition() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b"]), Timing::default(), false, start);
        assert_eq!(seq.jump_to(id("a"), start), vec![Effect::Settled]);
        assert!(!seq.is_in_flight());
    }

    #[test]
    fn jump_to_current_before_flip_still_shows_it() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), false, start);

        seq.request_navigate(id("c"), Trigger::Manual, start);
        // Inside the flip delay: "c" is current but only staged.
        let effects = seq.jump_to(id("c"), start + ms(10));
        assert_eq!(effects, vec![Effect::Show(id("c"))]);

        let (_, effects) = settle(&mut seq, start + ms(10));
        assert_eq!(effects, vec![Effect::Settled]);
        assert_eq!(seq.current(), Some(&id("c")));
        assert_eq!(seq.crossfade().artwork(seq.crossfade().active()), Some(&id("c")));
    }

    #[test]
    fn teardown_cancels_everything() {
        let start = Instant::now();
        let mut seq = Sequencer::new(&catalog(&["a", "b", "c"]), Timing::default(), true, start);
        seq.request_navigate(id("b"), Trigger::Manual, start);
        seq.request_navigate(id("c"), Trigger::Manual, start);

        seq.teardown();

        assert!(seq.next_deadline().is_none());
        assert!(seq.pending().is_empty());
        assert!(seq.tick(start + Duration::from_secs(60)).is_empty());
        assert_eq!(seq.current(), Some(&id("b")));
    }

    #[derive(Debug, Clone)]
    enum Step {
        Go(usize),
        Jump(usize),
        Wait(u64),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            3 => (0usize..5).prop_map(Step::Go),
            1 => (0usize..4).prop_map(Step::Jump),
            3 => (0u64..400).prop_map(Step::Wait),
        ]
    }

    proptest! {
        /// Rapid request and jump sequences settle on the last accepted known
        /// target, shown on the visible layer, and transitions never overlap.
        #[test]
        fn rapid_requests_settle_on_last_target(
            steps in proptest::collection::vec(step(), 1..40)
        ) {
            let names = ["a", "b", "c", "d"];
            let timing = Timing::default();
            let mut now = Instant::now();
            let mut seq = Sequencer::new(&catalog(&names), timing, false, now);
            let mut expected = seq.current().cloned();
            let mut last_show: Option<Instant> = None;

            for step in steps {
                let effects = match step {
                    Step::Go(i) => {
                        // Index 4 is not in the catalog.
                        let target = names.get(i).map_or_else(|| id("ghost"), |n| id(n));
                        let accepted = seq.current() != Some(&target);
                        if accepted && i < names.len() {
                            expected = Some(target.clone());
                        }
                        seq.request_navigate(target, Trigger::Manual, now)
                    }
                    Step::Jump(i) => {
                        let target = id(names[i]);
                        expected = Some(target.clone());
                        // A jump preempts, so spacing restarts from here.
                        last_show = None;
                        seq.jump_to(target, now)
                    }
                    Step::Wait(n) => {
                        now += Duration::from_millis(n);
                        seq.tick(now)
                    }
                };
                let shows = effects.iter().filter(|e| matches!(e, Effect::Show(_))).count();
                prop_assert!(shows <= 1);
                if shows == 1 {
                    if let Some(previous) = last_show {
                        prop_assert!(now - previous >= timing.flip_delay + timing.crossfade);
                    }
                    last_show = Some(now);
                }
            }

            settle(&mut seq, now);
            prop_assert_eq!(seq.current().cloned(), expected);
            prop_assert_eq!(
                seq.crossfade().artwork(seq.crossfade().active()),
                seq.current()
            );
        }
    }
}
