use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use chrono::NaiveDate;

/// Stand-in store when the script URL or sheet id is missing: reads return
/// empty collections, writes fail fast before any network attempt.
pub struct DisabledStore;

fn not_configured() -> JournalError {
    JournalError::NotConfigured(
        "set JOURNAL_SCRIPT_URL and JOURNAL_SHEET_ID to enable writes".into(),
    )
}

#[async_trait::async_trait]
impl JournalStore for DisabledStore {
    async fn get_trades(&self) -> Result<Vec<Trade>, JournalError> {
        Ok(Vec::new())
    }

    async fn get_trades_by_date(&self, _date: NaiveDate) -> Result<Vec<Trade>, JournalError> {
        Ok(Vec::new())
    }

    async fn add_trade(&self, _draft: &TradeDraft) -> Result<Trade, JournalError> {
        Err(not_configured())
    }

    async fn update_trade(&self, _id: i64, _draft: &TradeDraft) -> Result<Trade, JournalError> {
        Err(not_configured())
    }

    async fn delete_trade(&self, _id: i64) -> Result<(), JournalError> {
        Err(not_configured())
    }

    async fn get_strategies(&self) -> Result<Vec<Strategy>, JournalError> {
        Ok(Vec::new())
    }

    async fn add_strategy(&self, _draft: &StrategyDraft) -> Result<Strategy, JournalError> {
        Err(not_configured())
    }

    async fn update_strategy(
        &self,
        _id: i64,
        _draft: &StrategyDraft,
    ) -> Result<Strategy, JournalError> {
        Err(not_configured())
    }

    async fn delete_strategy(&self, _id: i64) -> Result<(), JournalError> {
        Err(not_configured())
    }

    async fn get_psychology_entries(&self) -> Result<Vec<PsychologyEntry>, JournalError> {
        Ok(Vec::new())
    }

    async fn add_psychology_entry(
        &self,
        _draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        Err(not_configured())
    }

    async fn update_psychology_entry(
        &self,
        _id: i64,
        _draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        Err(not_configured())
    }

    async fn delete_psychology_entry(&self, _id: i64) -> Result<(), JournalError> {
        Err(not_configured())
    }
}
