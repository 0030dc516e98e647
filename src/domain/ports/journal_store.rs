use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::JournalError;
use chrono::NaiveDate;

/// The remote journal store. One implementation talks to the spreadsheet
/// script endpoint; the in-memory one backs tests and offline use. All
/// entities are owned by the store — callers hold only invalidate-on-mutation
/// copies.
#[async_trait::async_trait]
pub trait JournalStore: Send + Sync {
    async fn get_trades(&self) -> Result<Vec<Trade>, JournalError>;
    async fn get_trades_by_date(&self, date: NaiveDate) -> Result<Vec<Trade>, JournalError>;
    async fn add_trade(&self, draft: &TradeDraft) -> Result<Trade, JournalError>;
    async fn update_trade(&self, id: i64, draft: &TradeDraft) -> Result<Trade, JournalError>;
    async fn delete_trade(&self, id: i64) -> Result<(), JournalError>;

    async fn get_strategies(&self) -> Result<Vec<Strategy>, JournalError>;
    async fn add_strategy(&self, draft: &StrategyDraft) -> Result<Strategy, JournalError>;
    async fn update_strategy(&self, id: i64, draft: &StrategyDraft)
        -> Result<Strategy, JournalError>;
    async fn delete_strategy(&self, id: i64) -> Result<(), JournalError>;

    async fn get_psychology_entries(&self) -> Result<Vec<PsychologyEntry>, JournalError>;
    async fn add_psychology_entry(
        &self,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError>;
    async fn update_psychology_entry(
        &self,
        id: i64,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError>;
    async fn delete_psychology_entry(&self, id: i64) -> Result<(), JournalError>;
}
