// SPDX-License-Identifier: MPL-2.0
//! Filmstrip auto-scroll geometry.
//!
//! The strip only moves when the active thumbnail is hidden or hugging an
//! edge; otherwise the visitor's own scroll position is left alone.

/// Distance from either edge that counts as "out of view".
pub const EDGE_MARGIN_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    pub thumbnail_width: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl Default for StripMetrics {
    fn default() -> Self {
        Self {
            thumbnail_width: 72.0,
            spacing: 8.0,
            padding: 12.0,
        }
    }
}

impl StripMetrics {
    /// Left edge of the thumbnail at `index`, in content coordinates.
    #[must_use]
    pub fn left_of(&self, index: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f32;
        self.padding + index * (self.thumbnail_width + self.spacing)
    }

    /// Total scrollable width of a strip with `count` thumbnails.
    #[must_use]
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 2.0 * self.padding;
        }
        self.left_of(count - 1) + self.thumbnail_width + self.padding
    }
}

/// Horizontal scroll offset that centers `index`, or `None` when the
/// thumbnail is comfortably visible already.
#[must_use]
pub fn scroll_target(
    metrics: &StripMetrics,
    index: usize,
    count: usize,
    scroll_x: f32,
    viewport_width: f32,
) -> Option<f32> {
    if index >= count || viewport_width <= 0.0 {
        return None;
    }
    let left = metrics.left_of(index) - scroll_x;
    let right = left + metrics.thumbnail_width;
    let out_of_view = left < EDGE_MARGIN_PX || right > viewport_width - EDGE_MARGIN_PX;
    if !out_of_view {
        return None;
    }

    let centered = metrics.left_of(index) + metrics.thumbnail_width / 2.0 - viewport_width / 2.0;
    let max = (metrics.content_width(count) - viewport_width).max(0.0);
    Some(centered.clamp(0.0, max))
}
