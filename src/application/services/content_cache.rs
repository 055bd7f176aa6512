//! In-memory per-selection content cache.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::{ContentInstance, SelectionType, MAX_TOP_ITEMS};

/// Fixed two-bucket cache mapping a selection type to its last complete
/// fetch result.
///
/// A bucket is usable only when it holds exactly [`MAX_TOP_ITEMS`]
/// entries; partial results are never stored, so a short page can
/// neither be served as the full set nor trigger a refetch loop once
/// written back. Buckets live for the process lifetime and are never
/// evicted.
#[derive(Default)]
pub struct ContentCache {
    buckets: RwLock<HashMap<SelectionType, Vec<ContentInstance>>>,
}

impl ContentCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached set for the selection, if it is complete.
    pub async fn complete(&self, selection: SelectionType) -> Option<Vec<ContentInstance>> {
        let buckets = self.buckets.read().await;
        match buckets.get(&selection) {
            Some(items) if items.len() == MAX_TOP_ITEMS => {
                trace!(selection = %selection, "Content cache hit");
                Some(items.clone())
            }
            _ => {
                trace!(selection = %selection, "Content cache miss");
                None
            }
        }
    }

    /// Stores a fetch result, refusing anything but a complete set.
    pub async fn store(&self, selection: SelectionType, items: Vec<ContentInstance>) {
        if items.len() != MAX_TOP_ITEMS {
            debug!(
                selection = %selection,
                count = items.len(),
                "Skipping cache write for partial result"
            );
            return;
        }

        debug!(selection = %selection, "Caching complete content set");
        let mut buckets = self.buckets.write().await;
        buckets.insert(selection, items);
    }

    /// Number of populated buckets.
    pub async fn len(&self) -> usize {
        self.buckets.read().await.len()
    }

    /// Returns whether no bucket is populated.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(count: usize) -> Vec<ContentInstance> {
        (0..count)
            .map(|i| ContentInstance {
                name: format!("Artist {i}"),
                images: Vec::new(),
                album: None,
                external_url: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_complete_set_is_stored_and_served() {
        let cache = ContentCache::new();
        cache
            .store(SelectionType::Artists, make_items(MAX_TOP_ITEMS))
            .await;

        let cached = cache.complete(SelectionType::Artists).await;
        assert_eq!(cached.map(|items| items.len()), Some(MAX_TOP_ITEMS));
    }

    #[tokio::test]
    async fn test_partial_set_is_never_written() {
        let cache = ContentCache::new();
        cache.store(SelectionType::Artists, make_items(42)).await;

        assert!(cache.is_empty().await);
        assert!(cache.complete(SelectionType::Artists).await.is_none());
    }

    #[tokio::test]
    async fn test_buckets_are_independent() {
        let cache = ContentCache::new();
        cache
            .store(SelectionType::Tracks, make_items(MAX_TOP_ITEMS))
            .await;

        assert!(cache.complete(SelectionType::Artists).await.is_none());
        assert!(cache.complete(SelectionType::Tracks).await.is_some());
        assert_eq!(cache.len().await, 1);
    }

    #[test]
    fn test_empty_bucket_is_a_miss() {
        let cache = ContentCache::new();
        assert!(tokio_test::block_on(cache.complete(SelectionType::Tracks)).is_none());
    }
}
