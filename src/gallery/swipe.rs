// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection from touch events.

use iced::Point;
use iced::touch::Finger;

/// Minimum horizontal travel, in logical pixels.
pub const MIN_DISTANCE_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
}

/// Tracks a single finger from press to lift.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(Finger, Point)>,
}

impl SwipeTracker {
    pub fn press(&mut self, finger: Finger, position: Point) {
        if self.start.is_none() {
            self.start = Some((finger, position));
        }
    }

    /// Finishes the gesture. Mostly-vertical or short moves are not swipes.
    pub fn lift(&mut self, finger: Finger, position: Point) -> Option<Swipe> {
        let (start_finger, start) = self.start?;
        if start_finger != finger {
            return None;
        }
        self.start = None;

        let dx = position.x - start.x;
        let dy = position.y - start.y;
        if dx.abs() < MIN_DISTANCE_PX || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
