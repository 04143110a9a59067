// SPDX-License-Identifier: MPL-2.0
//! Gallery view-state logic, free of any widget code.
//!
//! # Modules
//!
//! - [`sequencer`]: navigation queue, crossfade transitions, auto-advance
//! - [`grouping`]: year grouping and the year filter
//! - [`image_load`]: per-artwork loading state
//! - [`section_tracker`]: scroll-synchronized active year
//! - [`filmstrip`]: thumbnail strip auto-scroll
//! - [`swipe`]: touch swipe detection
//! - [`crossfade`], [`timers`]: building blocks of the sequencer

pub mod crossfade;
pub mod filmstrip;
pub mod grouping;
pub mod image_load;
pub mod section_tracker;
pub mod sequencer;
pub mod swipe;
pub mod timers;

pub use grouping::{YearFilter, YearGroup};
pub use image_load::{ImageLoad, Ticket};
pub use sequencer::{Effect, Sequencer, Timing, Trigger};

/// Window width at or below which the compact layout is used.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

#[must_use]
pub fn is_compact(width: f32) -> bool {
    width <= COMPACT_BREAKPOINT
}
