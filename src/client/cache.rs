use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error_handling::TrendsError;

/// Lazily populated, write-once slot for a lookup tree.
///
/// Only a completely decoded value is ever published, so readers never observe a
/// partial tree. Failed fetches leave the slot empty and the next call tries
/// again. Concurrent first calls may each fetch; the first one to publish wins.
#[derive(Debug)]
pub(crate) struct LookupCache<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> Default for LookupCache<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> LookupCache<T> {
    pub(crate) async fn get(&self) -> Option<Arc<T>> {
        self.slot.read().await.clone()
    }

    pub(crate) async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<T>, TrendsError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, TrendsError>>,
    {
        if let Some(cached) = self.get().await {
            return Ok(cached);
        }

        let fresh = Arc::new(fetch().await?);

        let mut slot = self.slot.write().await;
        if let Some(ref published) = *slot {
            return Ok(Arc::clone(published));
        }
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }
}
