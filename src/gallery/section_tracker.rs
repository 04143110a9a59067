// SPDX-License-Identifier: MPL-2.0
//! Scroll-synchronized active year.
//!
//! The grouped list shows one heading per year. While the visitor scrolls,
//! the highlighted year follows the section that occupies the top band of the
//! viewport. Near the very top the indicator snaps back to "all". A click on a
//! year heading scrolls there and holds the indicator for a moment so the
//! scroll animation cannot fight the click.

use super::grouping::{YearFilter, YearGroup};
use crate::domain::Year;
use std::time::{Duration, Instant};

/// Fraction of the viewport height, from the top, that decides the section.
pub const TOP_BAND_RATIO: f32 = 0.25;

/// Scroll offsets below this many pixels force "all".
pub const TOP_SNAP_PX: f32 = 50.0;

/// How long a jump holds the indicator.
pub const JUMP_SUPPRESSION: Duration = Duration::from_secs(1);

/// Fixed row geometry of the grouped list, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub top_padding: f32,
    pub heading_height: f32,
    pub row_height: f32,
    pub group_spacing: f32,
}

impl Default for SectionMetrics {
    fn default() -> Self {
        Self {
            top_padding: 16.0,
            heading_height: 40.0,
            row_height: 32.0,
            group_spacing: 24.0,
        }
    }
}

impl SectionMetrics {
    /// Geometry of the compact drawer, whose rows also carry the medium.
    #[must_use]
    pub fn drawer() -> Self {
        Self {
            top_padding: 8.0,
            heading_height: 40.0,
            row_height: 52.0,
            group_spacing: 8.0,
        }
    }

    /// Top offset of every section heading, in list order.
    #[must_use]
    pub fn offsets(&self, groups: &[YearGroup<'_>]) -> Vec<(Year, f32)> {
        let mut y = self.top_padding;
        groups
            .iter()
            .map(|group| {
                let top = y;
                #[allow(clippy::cast_precision_loss)]
                let rows = group.artworks.len() as f32;
                y += self.heading_height + rows * self.row_height + self.group_spacing;
                (group.year, top)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    sections: Vec<(Year, f32)>,
    active: YearFilter,
    suppressed_until: Option<Instant>,
}

impl SectionTracker {
    #[must_use]
    pub fn new(sections: Vec<(Year, f32)>) -> Self {
        Self {
            sections,
            active: YearFilter::All,
            suppressed_until: None,
        }
    }

    #[must_use]
    pub fn active(&self) -> YearFilter {
        self.active
    }

    #[must_use]
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }

    /// Feeds a scroll position. Returns the new indicator value if it changed.
    pub fn on_scroll(
        &mut self,
        scroll_top: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Option<YearFilter> {
        if self.is_suppressed(now) {
            return None;
        }
        self.suppressed_until = None;

        let next = self.section_at(scroll_top, viewport_height);
        (next != self.active).then(|| {
            self.active = next;
            next
        })
    }

    /// Section under the top band for the given scroll position.
    #[must_use]
    pub fn section_at(&self, scroll_top: f32, viewport_height: f32) -> YearFilter {
        if scroll_top < TOP_SNAP_PX {
            return YearFilter::All;
        }
        let probe = scroll_top + viewport_height.max(0.0) * TOP_BAND_RATIO;
        self.sections
            .iter()
            .take_while(|(_, top)| *top <= probe)
            .last()
            .map_or(YearFilter::All, |(year, _)| YearFilter::Year(*year))
    }

    /// Explicit jump: sets the indicator, suppresses tracking and returns the
    /// scroll offset to move to.
    pub fn jump(&mut self, target: YearFilter, now: Instant) -> f32 {
        self.active = target;
        self.suppressed_until = Some(now + JUMP_SUPPRESSION);
        match target {
            YearFilter::All => 0.0,
            YearFilter::Year(year) => self
                .sections
                .iter()
                .find(|(y, _)| *y == year)
                .map_or(0.0, |(_, top)| *top),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artwork, Year};
    use crate::gallery::grouping::group_by_year;

    fn year(y: i32) -> Year {
        Year::new(y).unwrap()
    }

    fn artwork(id: &str, y: i32) -> Artwork {
        Artwork::builder(id, id, year(y), "img").build()
    }

    fn tracker() -> SectionTracker {
        // 2024: 3 rows, 2023: 2 rows, 2022: 1 row.
        let list = vec![
            artwork("a", 2024),
            artwork("b", 2024),
            artwork("c", 2024),
            artwork("d", 2023),
            artwork("e", 2023),
            artwork("f", 2022),
        ];
        let offsets = SectionMetrics::default().offsets(&group_by_year(&list));
        SectionTracker::new(offsets)
    }

    #[test]
    fn offsets_accumulate_rows() {
        let t = tracker();
        assert_eq!(t.sections[0], (year(2024), 16.0));
        // 16 + 40 + 3*32 + 24
        assert_eq!(t.sections[1], (year(2023), 176.0));
        // 176 + 40 + 2*32 + 24
        assert_eq!(t.sections[2], (year(2022), 304.0));
    }

    #[test]
    fn near_top_is_all() {
        let mut t = tracker();
        let now = Instant::now();
        assert_eq!(t.section_at(0.0, 400.0), YearFilter::All);
        assert_eq!(t.section_at(49.9, 400.0), YearFilter::All);
        assert_eq!(t.on_scroll(10.0, 400.0, now), None);
    }

    #[test]
    fn follows_section_in_top_band() {
        let mut t = tracker();
        let now = Instant::now();
        // Probe = 60 + 100 = 160, still inside 2024.
        assert_eq!(t.on_scroll(60.0, 400.0, now), Some(YearFilter::Year(year(2024))));
        // Probe = 80 + 100 = 180, past the 2023 heading.
        assert_eq!(t.on_scroll(80.0, 400.0, now), Some(YearFilter::Year(year(2023))));
        assert_eq!(t.on_scroll(90.0, 400.0, now), None);
        assert_eq!(t.on_scroll(0.0, 400.0, now), Some(YearFilter::All));
    }

    #[test]
    fn jump_suppresses_tracking_for_a_second() {
        let mut t = tracker();
        let now = Instant::now();
        let offset = t.jump(YearFilter::Year(year(2022)), now);
        assert_eq!(offset, 304.0);
        assert_eq!(t.active(), YearFilter::Year(year(2022)));

        // Scroll events during the animation are ignored.
        assert_eq!(t.on_scroll(0.0, 400.0, now + Duration::from_millis(500)), None);
        assert_eq!(t.active(), YearFilter::Year(year(2022)));

        // After the window, tracking resumes.
        assert_eq!(
            t.on_scroll(0.0, 400.0, now + Duration::from_secs(1)),
            Some(YearFilter::All)
        );
    }

    #[test]
    fn jump_to_all_scrolls_to_top() {
        let mut t = tracker();
        assert_eq!(t.jump(YearFilter::All, Instant::now()), 0.0);
    }
}
