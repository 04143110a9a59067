// SPDX-License-Identifier: MPL-2.0
//! Artwork image fetching, decoding and caching.
//!
//! # Modules
//!
//! - [`loader`]: fetch (HTTP or local path) and decode into [`ImageData`]
//! - [`cache`]: LRU cache of decoded images, used for prefetching neighbours

pub mod cache;
pub mod loader;

pub use cache::{CacheConfig, ImageCache};
pub use loader::load;

use iced::widget::image;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Approximate memory footprint (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}
