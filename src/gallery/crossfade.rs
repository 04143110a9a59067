// SPDX-License-Identifier: MPL-2.0
//! Two-layer crossfade.
//!
//! The stage stacks two image layers. A transition writes the incoming artwork
//! into the hidden layer, then flips which layer is visible; the opacities
//! below animate that flip. Only the sequencer mutates this state.

use crate::domain::ArtworkId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    One,
    Two,
}

impl Layer {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Layer::One => Layer::Two,
            Layer::Two => Layer::One,
        }
    }

    fn slot(self) -> usize {
        match self {
            Layer::One => 0,
            Layer::Two => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Crossfade {
    active: Layer,
    layers: [Option<ArtworkId>; 2],
    flipped_at: Option<Instant>,
    duration: Duration,
}

impl Crossfade {
    /// Both layers start on the same artwork, layer one visible.
    #[must_use]
    pub fn new(initial: Option<ArtworkId>, duration: Duration) -> Self {
        Self {
            active: Layer::One,
            layers: [initial.clone(), initial],
            flipped_at: None,
            duration,
        }
    }

    #[must_use]
    pub fn active(&self) -> Layer {
        self.active
    }

    #[must_use]
    pub fn hidden(&self) -> Layer {
        self.active.other()
    }

    #[must_use]
    pub fn artwork(&self, layer: Layer) -> Option<&ArtworkId> {
        self.layers[layer.slot()].as_ref()
    }

    /// Writes `id` into the hidden layer and returns that layer.
    pub fn stage(&mut self, id: ArtworkId) -> Layer {
        let hidden = self.hidden();
        self.layers[hidden.slot()] = Some(id);
        hidden
    }

    /// Makes the hidden layer visible and starts the fade.
    pub fn flip(&mut self, now: Instant) {
        self.active = self.active.other();
        self.flipped_at = Some(now);
    }

    /// Ends the fade; the active layer is fully opaque from here on.
    pub fn settle(&mut self) {
        self.flipped_at = None;
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.flipped_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    /// Linear progress of the current fade, `1.0` when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.flipped_at {
            Some(at) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Eased opacity of `layer` at `now`.
    #[must_use]
    pub fn opacity(&self, layer: Layer, now: Instant) -> f32 {
        let eased = ease_in_out(self.progress(now));
        if layer == self.active {
            eased
        } else {
            1.0 - eased
        }
    }
}

/// Smoothstep easing, close to the usual `ease-in-out` curve.
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> Crossfade {
        Crossfade::new(Some("a".into()), Duration::from_millis(300))
    }

    #[test]
    fn starts_with_both_layers_on_initial_artwork() {
        let fade = fade();
        assert_eq!(fade.active(), Layer::One);
        assert_eq!(fade.artwork(Layer::One), fade.artwork(Layer::Two));
        assert_eq!(fade.opacity(Layer::One, Instant::now()), 1.0);
        assert_eq!(fade.opacity(Layer::Two, Instant::now()), 0.0);
    }

    #[test]
    fn stage_writes_hidden_layer_only() {
        let mut fade = fade();
        let layer = fade.stage("b".into());
        assert_eq!(layer, Layer::Two);
        assert_eq!(fade.artwork(Layer::One).map(ArtworkId::as_str), Some("a"));
        assert_eq!(fade.artwork(Layer::Two).map(ArtworkId::as_str), Some("b"));
        assert_eq!(fade.active(), Layer::One);
    }

    #[test]
    fn flip_animates_towards_new_layer() {
        let mut fade = fade();
        let start = Instant::now();
        fade.stage("b".into());
        fade.flip(start);

        assert_eq!(fade.active(), Layer::Two);
        assert!(fade.is_fading(start));
        assert_eq!(fade.opacity(Layer::Two, start), 0.0);

        let mid = start + Duration::from_millis(150);
        let a = fade.opacity(Layer::One, mid);
        let b = fade.opacity(Layer::Two, mid);
        assert!((a + b - 1.0).abs() < 1e-6);

        let end = start + Duration::from_millis(300);
        assert!(!fade.is_fading(end));
        assert_eq!(fade.opacity(Layer::Two, end), 1.0);
    }

    #[test]
    fn settle_snaps_to_active_layer() {
        let mut fade = fade();
        let start = Instant::now();
        fade.stage("b".into());
        fade.flip(start);
        fade.settle();
        assert_eq!(fade.opacity(Layer::Two, start), 1.0);
        assert_eq!(fade.opacity(Layer::One, start), 0.0);
    }
}
