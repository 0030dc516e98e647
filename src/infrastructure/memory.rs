use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use chrono::NaiveDate;
use std::sync::Mutex;

/// In-process store with the same contract as the remote one. Backs the
/// integration tests and offline experimentation; ids are assigned
/// sequentially the way the sheet script assigns row ids.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    trades: Vec<Trade>,
    strategies: Vec<Strategy>,
    entries: Vec<PsychologyEntry>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn alloc_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn lock(inner: &Mutex<Inner>) -> Result<std::sync::MutexGuard<'_, Inner>, JournalError> {
    inner
        .lock()
        .map_err(|e| JournalError::Transport(e.to_string()))
}

#[async_trait::async_trait]
impl JournalStore for InMemoryStore {
    async fn get_trades(&self) -> Result<Vec<Trade>, JournalError> {
        Ok(lock(&self.inner)?.trades.clone())
    }

    async fn get_trades_by_date(&self, date: NaiveDate) -> Result<Vec<Trade>, JournalError> {
        Ok(lock(&self.inner)?
            .trades
            .iter()
            .filter(|t| t.trade_date == date)
            .cloned()
            .collect())
    }

    async fn add_trade(&self, draft: &TradeDraft) -> Result<Trade, JournalError> {
        let mut inner = lock(&self.inner)?;
        let id = inner.alloc_id();
        let trade = Trade::from_draft(id, draft);
        inner.trades.push(trade.clone());
        Ok(trade)
    }

    async fn update_trade(&self, id: i64, draft: &TradeDraft) -> Result<Trade, JournalError> {
        let mut inner = lock(&self.inner)?;
        let slot = inner
            .trades
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("Trade not found: {id}")))?;
        let created_at = slot.created_at;
        *slot = Trade::from_draft(id, draft);
        slot.created_at = created_at;
        Ok(slot.clone())
    }

    async fn delete_trade(&self, id: i64) -> Result<(), JournalError> {
        let mut inner = lock(&self.inner)?;
        let before = inner.trades.len();
        inner.trades.retain(|t| t.id != id);
        if inner.trades.len() == before {
            return Err(JournalError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }

    async fn get_strategies(&self) -> Result<Vec<Strategy>, JournalError> {
        Ok(lock(&self.inner)?.strategies.clone())
    }

    async fn add_strategy(&self, draft: &StrategyDraft) -> Result<Strategy, JournalError> {
        let mut inner = lock(&self.inner)?;
        let id = inner.alloc_id();
        let strategy = Strategy::from_draft(id, draft);
        inner.strategies.push(strategy.clone());
        Ok(strategy)
    }

    async fn update_strategy(
        &self,
        id: i64,
        draft: &StrategyDraft,
    ) -> Result<Strategy, JournalError> {
        let mut inner = lock(&self.inner)?;
        let slot = inner
            .strategies
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("Strategy not found: {id}")))?;
        slot.name = draft.name.clone();
        slot.description = draft.description.clone();
        Ok(slot.clone())
    }

    async fn delete_strategy(&self, id: i64) -> Result<(), JournalError> {
        let mut inner = lock(&self.inner)?;
        let before = inner.strategies.len();
        inner.strategies.retain(|s| s.id != id);
        if inner.strategies.len() == before {
            return Err(JournalError::NotFound(format!("Strategy not found: {id}")));
        }
        Ok(())
    }

    async fn get_psychology_entries(&self) -> Result<Vec<PsychologyEntry>, JournalError> {
        Ok(lock(&self.inner)?.entries.clone())
    }

    async fn add_psychology_entry(
        &self,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        let mut inner = lock(&self.inner)?;
        let id = inner.alloc_id();
        let entry = PsychologyEntry::from_draft(id, draft);
        inner.entries.push(entry.clone());
        Ok(entry)
    }

    async fn update_psychology_entry(
        &self,
        id: i64,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        let mut inner = lock(&self.inner)?;
        let slot = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| JournalError::NotFound(format!("Psychology entry not found: {id}")))?;
        let created_at = slot.created_at;
        *slot = PsychologyEntry::from_draft(id, draft);
        slot.created_at = created_at;
        Ok(slot.clone())
    }

    async fn delete_psychology_entry(&self, id: i64) -> Result<(), JournalError> {
        let mut inner = lock(&self.inner)?;
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id);
        if inner.entries.len() == before {
            return Err(JournalError::NotFound(format!(
                "Psychology entry not found: {id}"
            )));
        }
        Ok(())
    }
}
