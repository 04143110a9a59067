// SPDX-License-Identifier: MPL-2.0
//! Range-checked configuration values.
//!
//! Each newtype clamps on construction so the rest of the application never
//! sees an out-of-range interval, size or quality, whatever the settings file
//! contains.
//!
//! ```
//! use iced_folio::app::config::values::AutoAdvanceSecs;
//!
//! assert_eq!(AutoAdvanceSecs::new(1).value(), 2); // clamped to min
//! assert_eq!(AutoAdvanceSecs::default().value(), 4);
//! ```

use super::defaults::*;
use std::time::Duration;

/// Defines a clamping newtype over an integer setting.
macro_rules! clamped_value {
    ($(#[$meta:meta])* $name:ident($ty:ty), $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name($ty);

        impl $name {
            /// Creates the value, clamping to the valid range.
            #[must_use]
            pub fn new(value: $ty) -> Self {
                Self(value.clamp($min, $max))
            }

            #[must_use]
            pub fn value(self) -> $ty {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl From<Option<$ty>> for $name {
            fn from(value: Option<$ty>) -> Self {
                value.map_or_else(Self::default, Self::new)
            }
        }
    };
}

clamped_value!(
    /// Seconds between automatic advances.
    AutoAdvanceSecs(u32),
    MIN_AUTO_ADVANCE_SECS,
    MAX_AUTO_ADVANCE_SECS,
    DEFAULT_AUTO_ADVANCE_SECS
);

clamped_value!(
    /// Seconds a manual navigation holds auto-advance off.
    ManualPauseSecs(u32),
    MIN_MANUAL_PAUSE_SECS,
    MAX_MANUAL_PAUSE_SECS,
    DEFAULT_MANUAL_PAUSE_SECS
);

clamped_value!(
    CrossfadeMs(u32),
    MIN_CROSSFADE_MS,
    MAX_CROSSFADE_MS,
    DEFAULT_CROSSFADE_MS
);

clamped_value!(
    FlipDelayMs(u32),
    MIN_FLIP_DELAY_MS,
    MAX_FLIP_DELAY_MS,
    DEFAULT_FLIP_DELAY_MS
);

clamped_value!(FadeInMs(u32), MIN_FADE_IN_MS, MAX_FADE_IN_MS, DEFAULT_FADE_IN_MS);

clamped_value!(
    /// Seconds a fetched catalog stays fresh. Zero refetches on every refresh.
    RevalidateSecs(u32),
    MIN_REVALIDATE_SECS,
    MAX_REVALIDATE_SECS,
    DEFAULT_REVALIDATE_SECS
);

clamped_value!(
    DisplayWidth(u32),
    MIN_DISPLAY_WIDTH,
    MAX_DISPLAY_WIDTH,
    DEFAULT_DISPLAY_WIDTH
);

clamped_value!(
    ThumbnailWidth(u32),
    MIN_THUMBNAIL_WIDTH,
    MAX_THUMBNAIL_WIDTH,
    DEFAULT_THUMBNAIL_WIDTH
);

clamped_value!(
    ImageQuality(u8),
    MIN_IMAGE_QUALITY,
    MAX_IMAGE_QUALITY,
    DEFAULT_IMAGE_QUALITY
);

clamped_value!(
    /// Decoded image cache budget in megabytes.
    CacheMegabytes(u32),
    MIN_CACHE_MB,
    MAX_CACHE_MB,
    DEFAULT_CACHE_MB
);

clamped_value!(
    CacheImages(u32),
    MIN_CACHE_IMAGES,
    MAX_CACHE_IMAGES,
    DEFAULT_CACHE_IMAGES
);

impl AutoAdvanceSecs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl ManualPauseSecs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl RevalidateSecs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl CrossfadeMs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl FlipDelayMs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl FadeInMs {
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl CacheMegabytes {
    #[must_use]
    pub fn as_bytes(self) -> usize {
        self.0 as usize * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoAdvanceSecs::new(0).value(), MIN_AUTO_ADVANCE_SECS);
        assert_eq!(AutoAdvanceSecs::new(999).value(), MAX_AUTO_ADVANCE_SECS);
        assert_eq!(ImageQuality::new(0).value(), MIN_IMAGE_QUALITY);
        assert_eq!(ImageQuality::new(255).value(), MAX_IMAGE_QUALITY);
    }

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(CrossfadeMs::from(None), CrossfadeMs::default());
        assert_eq!(CrossfadeMs::from(Some(10_000)).value(), MAX_CROSSFADE_MS);
    }

    #[test]
    fn durations_use_the_right_unit() {
        assert_eq!(AutoAdvanceSecs::default().as_duration(), Duration::from_secs(4));
        assert_eq!(CrossfadeMs::default().as_duration(), Duration::from_millis(300));
        assert_eq!(FlipDelayMs::new(0).as_duration(), Duration::ZERO);
        assert_eq!(RevalidateSecs::new(0).as_duration(), Duration::ZERO);
    }

    #[test]
    fn cache_megabytes_converts_to_bytes() {
        assert_eq!(CacheMegabytes::new(8).as_bytes(), 8 * 1024 * 1024);
    }
}
