// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache.
//!
//! Keyed by resolved image reference. Bounded both by entry count and by
//! decoded size; the least recently used entry goes first. The gallery fills
//! it with the current artwork and prefetches the neighbours in the visible
//! list so a click rarely waits on the network.

use super::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default decoded-size budget (64 MB).
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024;

pub const MIN_MAX_BYTES: usize = 8 * 1024 * 1024;
pub const MAX_MAX_BYTES: usize = 512 * 1024 * 1024;

/// Default number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 24;

pub const MIN_MAX_IMAGES: usize = 4;
pub const MAX_MAX_IMAGES: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_bytes: usize,
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl CacheConfig {
    /// Clamps both limits to their supported ranges.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_MAX_BYTES, MAX_MAX_BYTES),
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    entries: LruCache<String, ImageData>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Stores `image`. Images larger than half the budget are not cached.
    pub fn insert(&mut self, reference: String, image: ImageData) -> bool {
        let size = image.size_bytes();
        if size > self.config.max_bytes / 2 {
            tracing::debug!(%reference, size, "image too large to cache");
            return false;
        }

        if let Some(previous) = self.entries.pop(&reference) {
            self.current_bytes = self.current_bytes.saturating_sub(previous.size_bytes());
        }
        while self.current_bytes + size > self.config.max_bytes {
            let Some((_, evicted)) = self.entries.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }

        // `push` reports the entry it displaced when the count limit is hit.
        if let Some((_, evicted)) = self.entries.push(reference, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        true
    }

    /// Looks up `reference`, refreshing its recency.
    pub fn get(&mut self, reference: &str) -> Option<ImageData> {
        match self.entries.get(reference) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Non-touching lookup for views.
    #[must_use]
    pub fn peek(&self, reference: &str) -> Option<&ImageData> {
        self.entries.peek(reference)
    }

    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.entries.contains(reference)
    }

    /// The subset of `references` not cached yet, duplicates removed.
    #[must_use]
    pub fn missing<'a>(&self, references: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for reference in references {
            if !self.entries.contains(reference) && !out.iter().any(|r| r == reference) {
                out.push(reference.to_string());
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("memory_usage", &self.current_bytes)
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(side: u32) -> ImageData {
        ImageData::from_rgba(side, side, vec![0; (side * side * 4) as usize])
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ImageCache::default();
        assert!(cache.insert("a".into(), image(10)));
        assert_eq!(cache.get("a").map(|i| i.width), Some(10));
        assert!(cache.get("b").is_none());
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, evictions: 0 });
    }

    #[test]
    fn evicts_least_recent_on_count_limit() {
        let mut cache = ImageCache::new(CacheConfig::new(MIN_MAX_BYTES, MIN_MAX_IMAGES));
        for name in ["a", "b", "c", "d"] {
            cache.insert(name.into(), image(4));
        }
        cache.get("a");
        cache.insert("e".into(), image(4));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert_eq!(cache.len(), MIN_MAX_IMAGES);
        assert_eq!(cache.memory_usage(), MIN_MAX_IMAGES * 64);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn evicts_on_byte_limit() {
        // Each 1024x1024 image is 4 MB; the budget holds two.
        let mut cache = ImageCache::new(CacheConfig::new(MIN_MAX_BYTES, 16));
        cache.insert("a".into(), image(1024));
        cache.insert("b".into(), image(1024));
        cache.insert("c".into(), image(1024));
        assert!(!cache.contains("a"));
        assert_eq!(cache.len(), 2);
        assert!(cache.memory_usage() <= MIN_MAX_BYTES);
    }

    #[test]
    fn oversized_image_is_refused() {
        let mut cache = ImageCache::new(CacheConfig::new(MIN_MAX_BYTES, 16));
        // 2048x2048 = 16 MB, over half of 8 MB.
        assert!(!cache.insert("huge".into(), image(2048)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_replaces_size() {
        let mut cache = ImageCache::default();
        cache.insert("a".into(), image(10));
        cache.insert("a".into(), image(20));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 20 * 20 * 4);
    }

    #[test]
    fn missing_skips_cached_and_duplicates() {
        let mut cache = ImageCache::default();
        cache.insert("a".into(), image(2));
        assert_eq!(cache.missing(["a", "b", "b", "c"]), vec!["b", "c"]);
    }
}
