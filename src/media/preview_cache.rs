// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache for the gallery grid.
//!
//! Paging back and forth re-requests the same preview URLs; keeping their
//! decoded handles avoids downloading them again.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used thumbnails are evicted first
//! - **Count-bounded**: Thumbnails are small, so the limit is an entry count
//! - **URL-keyed**: Entries are indexed by the provider preview URL

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of thumbnails kept (a little over a dozen pages of results).
pub const DEFAULT_PREVIEW_CAPACITY: usize = 64;

/// Statistics about preview cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

impl PreviewStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of thumbnail handles.
pub struct PreviewCache {
    cache: LruCache<String, Handle>,
    stats: PreviewStats,
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("len", &self.cache.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CAPACITY)
    }
}

impl PreviewCache {
    /// Creates a cache holding up to `capacity` thumbnails (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: PreviewStats::default(),
        }
    }

    /// Stores the downloaded bytes for `url`.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) {
        self.cache.put(url, Handle::from_bytes(bytes));
        self.stats.insertions += 1;
    }

    /// Returns the handle for `url`, updating LRU order.
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        let handle = self.cache.get(url).cloned();
        if handle.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        handle
    }

    /// Returns the handle for `url` without touching LRU order or statistics.
    ///
    /// Used from `view`, which only has shared access.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// Returns the subset of `urls` that still has to be downloaded.
    pub fn missing<'a>(&mut self, urls: &'a [String]) -> Vec<&'a String> {
        urls.iter().filter(|url| self.get(url).is_none()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> PreviewStats {
        self.stats
    }
}
