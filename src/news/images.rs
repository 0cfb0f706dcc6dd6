// SPDX-License-Identifier: MPL-2.0
//! Card illustration cache.
//!
//! Images are downloaded after the edition is ready and kept in an LRU cache
//! keyed by [`NewsId`]. A card whose image is missing, still downloading, or
//! failed to load simply renders its placeholder panel.
//!
//! # Lifecycle
//!
//! 1. [`ImageCache::take_pending`] picks the items that still need an image
//!    and marks them in flight
//! 2. the application downloads each one through
//!    [`Transport::get_bytes`](super::transport::Transport::get_bytes)
//! 3. the result is recorded with [`ImageCache::insert`] or
//!    [`ImageCache::mark_failed`]

use super::{NewsId, NewsItem};
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of cached illustrations.
pub const DEFAULT_CACHE_CAPACITY: usize = 24;

/// Lower bound for the configured capacity.
pub const MIN_CACHE_CAPACITY: usize = 4;

/// Upper bound for the configured capacity.
pub const MAX_CACHE_CAPACITY: usize = 128;

/// Counters exposed for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCacheStats {
    pub insertions: u64,
    pub evictions: u64,
    pub failures: u64,
}

/// LRU cache of decoded-ready image handles.
pub struct ImageCache {
    cache: LruCache<NewsId, image::Handle>,
    in_flight: HashSet<NewsId>,
    failed: HashSet<NewsId>,
    enabled: bool,
    stats: ImageCacheStats,
}

impl ImageCache {
    /// Creates a cache holding up to `capacity` images (clamped).
    #[must_use]
    pub fn new(capacity: usize, enabled: bool) -> Self {
        let capacity = capacity.clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            in_flight: HashSet::new(),
            failed: HashSet::new(),
            enabled,
            stats: ImageCacheStats::default(),
        }
    }

    /// A cache that never requests anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, false)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Returns `(id, url)` pairs that should be downloaded now and marks them
    /// in flight.
    ///
    /// Items without an image URL, already cached, already in flight, or that
    /// failed before are skipped. At most `capacity` downloads are handed out,
    /// in edition order, so that the first stories are the ones illustrated.
    pub fn take_pending(&mut self, items: &[NewsItem]) -> Vec<(NewsId, String)> {
        if !self.enabled {
            return Vec::new();
        }

        let budget = self.capacity().saturating_sub(self.cache.len() + self.in_flight.len());
        let pending: Vec<(NewsId, String)> = items
            .iter()
            .filter_map(|item| Some((item.id.clone(), item.image_url.clone()?)))
            .filter(|(id, _)| {
                !self.cache.contains(id) && !self.in_flight.contains(id) && !self.failed.contains(id)
            })
            .take(budget)
            .collect();

        self.in_flight
            .extend(pending.iter().map(|(id, _)| id.clone()));
        pending
    }

    /// Stores downloaded bytes for `id`.
    pub fn insert(&mut self, id: NewsId, bytes: Vec<u8>) {
        self.in_flight.remove(&id);
        if !self.enabled {
            return;
        }
        // push returns the same key when updating, another key when evicting
        let displaced = self.cache.push(id.clone(), image::Handle::from_bytes(bytes));
        if displaced.is_some_and(|(old, _)| old != id) {
            self.stats.evictions += 1;
        }
        self.stats.insertions += 1;
    }

    /// Records a failed download so the item is not retried this edition.
    pub fn mark_failed(&mut self, id: NewsId) {
        self.in_flight.remove(&id);
        self.failed.insert(id);
        self.stats.failures += 1;
    }

    /// Looks up an image without touching the LRU order.
    #[must_use]
    pub fn handle(&self, id: &NewsId) -> Option<&image::Handle> {
        self.cache.peek(id)
    }

    #[must_use]
    pub fn is_failed(&self, id: &NewsId) -> bool {
        self.failed.contains(id)
    }

    #[must_use]
    pub fn is_loading(&self, id: &NewsId) -> bool {
        self.in_flight.contains(id)
    }

    /// Drops everything, including failure and in-flight records.
    ///
    /// Called when a new edition replaces the old one.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.in_flight.clear();
        self.failed.clear();
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
    pub fn stats(&self) -> ImageCacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::test_support::item;

    fn illustrated(n: usize) -> NewsItem {
        item(n).with_image(format!("https://img.example.com/{n}.png"))
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(ImageCache::new(0, true).capacity(), MIN_CACHE_CAPACITY);
        assert_eq!(ImageCache::new(10_000, true).capacity(), MAX_CACHE_CAPACITY);
    }

    #[test]
    fn pending_skips_items_without_images() {
        let mut cache = ImageCache::default();
        let items = vec![item(0), illustrated(1)];
        let pending = cache.take_pending(&items);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0.as_str(), "story-1");
        assert!(cache.is_loading(&items[1].id));
    }

    #[test]
    fn pending_is_handed_out_once() {
        let mut cache = ImageCache::default();
        let items = vec![illustrated(0)];
        assert_eq!(cache.take_pending(&items).len(), 1);
        assert!(cache.take_pending(&items).is_empty());
    }

    #[test]
    fn insert_makes_handle_available() {
        let mut cache = ImageCache::default();
        let items = vec![illustrated(0)];
        let (id, _) = cache.take_pending(&items).remove(0);

        cache.insert(id.clone(), vec![0u8; 4]);

        assert!(cache.handle(&id).is_some());
        assert!(!cache.is_loading(&id));
        assert_eq!(cache.stats().insertions, 1);
    }

    #[test]
    fn failed_items_are_not_retried() {
        let mut cache = ImageCache::default();
        let items = vec![illustrated(0)];
        let (id, _) = cache.take_pending(&items).remove(0);

        cache.mark_failed(id.clone());

        assert!(cache.is_failed(&id));
        assert!(cache.take_pending(&items).is_empty());
    }

    #[test]
    fn lru_evicts_oldest_beyond_capacity() {
        let mut cache = ImageCache::new(MIN_CACHE_CAPACITY, true);
        for n in 0..=MIN_CACHE_CAPACITY {
            cache.insert(illustrated(n).id, vec![0u8; 4]);
        }
        assert_eq!(cache.len(), MIN_CACHE_CAPACITY);
        assert!(cache.handle(&illustrated(0).id).is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn disabled_cache_requests_nothing() {
        let mut cache = ImageCache::disabled();
        assert!(cache.take_pending(&[illustrated(0)]).is_empty());
    }

    #[test]
    fn clear_forgets_failures() {
        let mut cache = ImageCache::default();
        let items = vec![illustrated(0)];
        let (id, _) = cache.take_pending(&items).remove(0);
        cache.mark_failed(id);
        cache.clear();
        assert_eq!(cache.take_pending(&items).len(), 1);
    }
}
