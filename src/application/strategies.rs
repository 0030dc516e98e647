use crate::application::cache::{CollectionCache, DEFAULT_STALE_AFTER};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use std::sync::Arc;

pub struct StrategiesUseCase {
    store: Arc<dyn JournalStore>,
    cache: CollectionCache<Strategy>,
}

impl StrategiesUseCase {
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self {
            store,
            cache: CollectionCache::new(DEFAULT_STALE_AFTER),
        }
    }

    pub async fn list(&self) -> Result<Vec<Strategy>, JournalError> {
        let store = self.store.clone();
        self.cache
            .get_or_fetch(|| async move { store.get_strategies().await })
            .await
    }

    pub async fn add(&self, draft: StrategyDraft) -> Result<Strategy, JournalError> {
        if draft.name.trim().is_empty() {
            return Err(JournalError::InvalidInput("strategy name is required".into()));
        }
        let strategy = self.store.add_strategy(&draft).await?;
        self.cache.invalidate().await;
        Ok(strategy)
    }

    pub async fn update(&self, id: i64, draft: StrategyDraft) -> Result<Strategy, JournalError> {
        if draft.name.trim().is_empty() {
            return Err(JournalError::InvalidInput("strategy name is required".into()));
        }
        let strategy = self.store.update_strategy(id, &draft).await?;
        self.cache.invalidate().await;
        Ok(strategy)
    }

    pub async fn delete(&self, id: i64) -> Result<(), JournalError> {
        self.store.delete_strategy(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
