//! Read-through collection cache with invalidate-on-mutation semantics.
//!
//! Each entity use case owns one cache. Reads serve the cached copy while it
//! is fresh; mutations invalidate so the next read refetches the whole
//! collection from the store. The cache never holds local edits — it only
//! ever contains server-confirmed state.

use crate::domain::error::JournalError;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long a fetched collection is served without refetching.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

pub struct CollectionCache<T> {
    inner: RwLock<CacheState<T>>,
    stale_after: Duration,
}

struct CacheState<T> {
    items: Option<Vec<T>>,
    fetched_at: Option<Instant>,
}

impl<T: Clone> CollectionCache<T> {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            inner: RwLock::new(CacheState {
                items: None,
                fetched_at: None,
            }),
            stale_after,
        }
    }

    /// Whether a collection has ever been fetched and is still cached.
    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.items.is_some()
    }

    /// Return the cached collection if present and fresh, otherwise run
    /// `fetch` and cache its result. Concurrent callers may both fetch;
    /// last write wins, which matches the store's own semantics.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Vec<T>, JournalError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, JournalError>>,
    {
        {
            let state = self.inner.read().await;
            if let Some(items) = &state.items {
                let fresh = state
                    .fetched_at
                    .map(|t| t.elapsed() < self.stale_after)
                    .unwrap_or(false);
                if fresh {
                    return Ok(items.clone());
                }
            }
        }

        let items = fetch().await?;
        let mut state = self.inner.write().await;
        state.items = Some(items.clone());
        state.fetched_at = Some(Instant::now());
        Ok(items)
    }

    /// Drop the cached collection. The next read refetches.
    pub async fn invalidate(&self) {
        let mut state = self.inner.write().await;
        state.items = None;
        state.fetched_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fresh_cache_skips_fetch() {
        let cache: CollectionCache<i64> = CollectionCache::new(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = calls.clone();
            let items = cache
                .get_or_fetch(|| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(items, vec![1, 2, 3]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_cache_refetches() {
        let cache: CollectionCache<i64> = CollectionCache::new(Duration::from_millis(10));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            cache
                .get_or_fetch(|| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1])
                })
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache: CollectionCache<i64> = CollectionCache::new(Duration::from_secs(60));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            cache
                .get_or_fetch(|| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1])
                })
                .await
                .unwrap();
            cache.invalidate().await;
            assert!(!cache.is_loaded().await);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_leaves_cache_empty() {
        let cache: CollectionCache<i64> = CollectionCache::new(Duration::from_secs(60));
        let result = cache
            .get_or_fetch(|| async { Err(JournalError::Http(500)) })
            .await;
        assert!(result.is_err());
        assert!(!cache.is_loaded().await);
    }
}
