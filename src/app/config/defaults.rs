// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Transition timings and auto-advance
//! - **Content**: Revalidation interval
//! - **Images**: Requested image size, quality and cache budget
//! - **Site**: Artist details shown on the About and Contact screens

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Whether the gallery advances on its own in wide layouts.
pub const DEFAULT_AUTO_ADVANCE: bool = true;

/// Idle time before auto-advance moves on (in seconds).
pub const DEFAULT_AUTO_ADVANCE_SECS: u32 = 4;
pub const MIN_AUTO_ADVANCE_SECS: u32 = 2;
pub const MAX_AUTO_ADVANCE_SECS: u32 = 60;

/// How long a manual navigation suppresses auto-advance (in seconds).
pub const DEFAULT_MANUAL_PAUSE_SECS: u32 = 10;
pub const MIN_MANUAL_PAUSE_SECS: u32 = 1;
pub const MAX_MANUAL_PAUSE_SECS: u32 = 120;

/// Crossfade length (in milliseconds).
pub const DEFAULT_CROSSFADE_MS: u32 = 300;
pub const MIN_CROSSFADE_MS: u32 = 50;
pub const MAX_CROSSFADE_MS: u32 = 2_000;

/// Delay before the hidden layer becomes visible (in milliseconds).
pub const DEFAULT_FLIP_DELAY_MS: u32 = 50;
pub const MIN_FLIP_DELAY_MS: u32 = 0;
pub const MAX_FLIP_DELAY_MS: u32 = 500;

/// Fade-in after an image finishes loading (in milliseconds).
pub const DEFAULT_FADE_IN_MS: u32 = 600;
pub const MIN_FADE_IN_MS: u32 = 0;
pub const MAX_FADE_IN_MS: u32 = 3_000;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// A fetched catalog is reused for this long (in seconds).
pub const DEFAULT_REVALIDATE_SECS: u32 = 60;
pub const MIN_REVALIDATE_SECS: u32 = 0;
pub const MAX_REVALIDATE_SECS: u32 = 86_400;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Width requested for the stage image (in pixels).
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1600;
pub const MIN_DISPLAY_WIDTH: u32 = 320;
pub const MAX_DISPLAY_WIDTH: u32 = 4096;

/// Width requested for thumbnails (in pixels).
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 200;
pub const MIN_THUMBNAIL_WIDTH: u32 = 64;
pub const MAX_THUMBNAIL_WIDTH: u32 = 800;

/// Encoder quality requested from the image host.
pub const DEFAULT_IMAGE_QUALITY: u8 = 80;
pub const MIN_IMAGE_QUALITY: u8 = 10;
pub const MAX_IMAGE_QUALITY: u8 = 100;

/// Decoded image cache budget (in megabytes).
pub const DEFAULT_CACHE_MB: u32 = 64;
pub const MIN_CACHE_MB: u32 = 8;
pub const MAX_CACHE_MB: u32 = 512;

/// Number of decoded images kept.
pub const DEFAULT_CACHE_IMAGES: u32 = 24;
pub const MIN_CACHE_IMAGES: u32 = 4;
pub const MAX_CACHE_IMAGES: u32 = 128;

// ==========================================================================
// Site Defaults
// ==========================================================================

pub const DEFAULT_ARTIST_NAME: &str = "Anjelina Villalobos";

pub const DEFAULT_BIOGRAPHY: &str = "Anjelina Villalobos is a contemporary artist \
whose work explores the intersection of color, texture, and emotion. Working \
primarily in oil and mixed media, she creates pieces that invite viewers to \
pause and reflect on the quiet moments that shape our experience.";

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@anjelinavillalobos.com";

pub const DEFAULT_INSTAGRAM_URL: &str = "https://instagram.com/anjelinavillalobos";

pub const DEFAULT_TWITTER_URL: &str = "https://twitter.com/anjelinavillalobos";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_ADVANCE_SECS > 0);
    assert!(DEFAULT_AUTO_ADVANCE_SECS >= MIN_AUTO_ADVANCE_SECS);
    assert!(DEFAULT_AUTO_ADVANCE_SECS <= MAX_AUTO_ADVANCE_SECS);

    assert!(DEFAULT_MANUAL_PAUSE_SECS >= MIN_MANUAL_PAUSE_SECS);
    assert!(DEFAULT_MANUAL_PAUSE_SECS <= MAX_MANUAL_PAUSE_SECS);

    assert!(DEFAULT_CROSSFADE_MS >= MIN_CROSSFADE_MS);
    assert!(DEFAULT_CROSSFADE_MS <= MAX_CROSSFADE_MS);
    assert!(DEFAULT_FLIP_DELAY_MS <= MAX_FLIP_DELAY_MS);
    assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_IN_MS);

    // A transition (flip + crossfade) must fit inside one auto-advance interval.
    assert!(MAX_FLIP_DELAY_MS + MAX_CROSSFADE_MS < MIN_AUTO_ADVANCE_SECS * 1000);

    assert!(DEFAULT_REVALIDATE_SECS <= MAX_REVALIDATE_SECS);

    assert!(DEFAULT_DISPLAY_WIDTH >= MIN_DISPLAY_WIDTH);
    assert!(DEFAULT_DISPLAY_WIDTH <= MAX_DISPLAY_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);
    assert!(DEFAULT_IMAGE_QUALITY >= MIN_IMAGE_QUALITY);
    assert!(DEFAULT_IMAGE_QUALITY <= MAX_IMAGE_QUALITY);

    assert!(DEFAULT_CACHE_MB >= MIN_CACHE_MB);
    assert!(DEFAULT_CACHE_MB <= MAX_CACHE_MB);
    assert!(DEFAULT_CACHE_IMAGES >= MIN_CACHE_IMAGES);
    assert!(DEFAULT_CACHE_IMAGES <= MAX_CACHE_IMAGES);
};
