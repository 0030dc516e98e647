use crate::application::cache::{CollectionCache, DEFAULT_STALE_AFTER};
use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use std::sync::Arc;

pub struct PsychologyUseCase {
    store: Arc<dyn JournalStore>,
    cache: CollectionCache<PsychologyEntry>,
}

impl PsychologyUseCase {
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(DEFAULT_STALE_AFTER),
        }
    }

    pub async fn list(&self) -> Result<Vec<PsychologyEntry>, JournalError> {
        let store = self.store.clone();
        self.cache
            .get_or_fetch(|| async move { store.get_psychology_entries().await })
            .await
    }

    pub async fn add(&self, draft: PsychologyDraft) -> Result<PsychologyEntry, JournalError> {
        let entry = self.store.add_psychology_entry(&draft).await?;
        self.cache.invalidate().await;
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: i64,
        draft: PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        let entry = self.store.update_psychology_entry(id, &draft).await?;
        self.cache.invalidate().await;
        Ok(entry)
    }

    pub async fn delete(&self, id: i64) -> Result<(), JournalError> {
        self.store.delete_psychology_entry(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
