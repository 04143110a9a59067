// SPDX-License-Identifier: MPL-2.0
//! Per-artwork image loading state.
//!
//! `idle → loading → {loaded, errored}`, restarted on every artwork change.
//! A retry moves `errored → loading` for the same artwork; nothing retries on
//! its own. Results are matched against a [`Ticket`] so a late answer for an
//! artwork the visitor already left is ignored.

use crate::domain::ArtworkId;
use std::time::{Duration, Instant};

/// Identifies one load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub artwork: ArtworkId,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded { since: Instant },
    Errored { message_key: &'static str },
}

#[derive(Debug, Clone)]
pub struct ImageLoad {
    artwork: Option<ArtworkId>,
    phase: Phase,
    generation: u64,
    fade_in: Duration,
}

impl ImageLoad {
    #[must_use]
    pub fn new(fade_in: Duration) -> Self {
        Self {
            artwork: None,
            phase: Phase::Idle,
            generation: 0,
            fade_in,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn artwork(&self) -> Option<&ArtworkId> {
        self.artwork.as_ref()
    }

    /// Starts loading `artwork`, superseding any attempt in progress.
    pub fn begin(&mut self, artwork: ArtworkId) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.artwork = Some(artwork.clone());
        self.phase = Phase::Loading;
        Ticket {
            artwork,
            generation: self.generation,
        }
    }

    /// Back to `idle`, invalidating outstanding tickets.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.artwork = None;
        self.phase = Phase::Idle;
    }

    /// Records a successful decode. Returns `false` for a stale ticket.
    pub fn succeed(&mut self, ticket: &Ticket, now: Instant) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.phase = Phase::Loaded { since: now };
        true
    }

    /// Records a failure. Returns `false` for a stale ticket.
    pub fn fail(&mut self, ticket: &Ticket, message_key: &'static str) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.phase = Phase::Errored { message_key };
        true
    }

    /// Re-enters `loading` for the same artwork; only valid from `errored`.
    pub fn retry(&mut self) -> Option<Ticket> {
        match (self.phase, self.artwork.clone()) {
            (Phase::Errored { .. }, Some(artwork)) => Some(self.begin(artwork)),
            _ => None,
        }
    }

    #[must_use]
    pub fn show_skeleton(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }

    #[must_use]
    pub fn show_retry(&self) -> bool {
        matches!(self.phase, Phase::Errored { .. })
    }

    /// Image opacity; ramps to `1.0` over the fade-in once loaded.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Loaded { since } => {
                if self.fade_in.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (elapsed / self.fade_in.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Loaded { since } if now.saturating_duration_since(since) < self.fade_in)
    }

    fn accepts(&self, ticket: &Ticket) -> bool {
        self.phase == Phase::Loading
            && ticket.generation == self.generation
            && self.artwork.as_ref() == Some(&ticket.artwork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> ImageLoad {
        ImageLoad::new(Duration::from_millis(600))
    }

    #[test]
    fn starts_idle_with_skeleton() {
        let load = load();
        assert_eq!(load.phase(), Phase::Idle);
        assert!(load.show_skeleton());
        assert_eq!(load.opacity(Instant::now()), 0.0);
    }

    #[test]
    fn success_fades_in() {
        let mut load = load();
        let ticket = load.begin("a".into());
        assert!(load.show_skeleton());

        let now = Instant::now();
        assert!(load.succeed(&ticket, now));
        assert!(!load.show_skeleton());
        assert!(load.is_fading(now));
        assert_eq!(load.opacity(now + Duration::from_millis(600)), 1.0);
    }

    #[test]
    fn retry_reenters_loading_for_same_artwork() {
        let mut load = load();
        let ticket = load.begin("a".into());
        assert!(load.fail(&ticket, "error-network"));
        assert!(load.show_retry());

        let retry = load.retry().expect("retry from errored");
        assert_eq!(retry.artwork, ArtworkId::from("a"));
        assert_eq!(load.phase(), Phase::Loading);
        // The failed attempt cannot complete the retry.
        assert!(!load.succeed(&ticket, Instant::now()));
        assert!(load.succeed(&retry, Instant::now()));
    }

    #[test]
    fn retry_is_only_offered_after_error() {
        let mut load = load();
        assert!(load.retry().is_none());
        load.begin("a".into());
        assert!(load.retry().is_none());
    }

    #[test]
    fn late_result_for_previous_artwork_is_ignored() {
        let mut load = load();
        let old = load.begin("a".into());
        let new = load.begin("b".into());

        assert!(!load.succeed(&old, Instant::now()));
        assert_eq!(load.phase(), Phase::Loading);
        assert!(!load.fail(&old, "error-network"));
        assert!(load.fail(&new, "error-network"));
    }

    #[test]
    fn reset_invalidates_outstanding_ticket() {
        let mut load = load();
        let ticket = load.begin("a".into());
        load.reset();
        assert!(!load.succeed(&ticket, Instant::now()));
        assert_eq!(load.phase(), Phase::Idle);
    }
}
