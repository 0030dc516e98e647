pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::grouping::{self, DaySummary, StrategyPerformance};
use crate::application::metrics::TradeStats;
use crate::application::psychology::PsychologyUseCase;
use crate::application::strategies::StrategiesUseCase;
use crate::application::trades::TradesUseCase;
use crate::config::JournalConfig;
use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use crate::infrastructure::disabled::DisabledStore;
use crate::infrastructure::sheets::client::SheetsClient;
use chrono::NaiveDate;
use std::sync::Arc;

/// Facade over the journal: wires config → store → use cases and exposes
/// the operations the CLI (or any other consumer) needs.
pub struct TradeJournal {
    trades_uc: TradesUseCase,
    strategies_uc: StrategiesUseCase,
    psychology_uc: PsychologyUseCase,
}

impl TradeJournal {
    pub fn new() -> Result<Self, JournalError> {
        Self::with_config(&JournalConfig::from_env()?)
    }

    pub fn with_config(config: &JournalConfig) -> Result<Self, JournalError> {
        let store: Arc<dyn JournalStore> = if config.is_configured() {
            Arc::new(SheetsClient::from_config(config)?)
        } else {
            tracing::warn!("remote store not configured; reads return empty, writes fail");
            Arc::new(DisabledStore)
        };
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn JournalStore>) -> Self {
        Self {
            trades_uc: TradesUseCase::new(store.clone()),
            strategies_uc: StrategiesUseCase::new(store.clone()),
            psychology_uc: PsychologyUseCase::new(store),
        }
    }

    // Trades
    pub async fn trades(&self) -> Result<Vec<Trade>, JournalError> {
        self.trades_uc.list().await
    }

    pub async fn trades_on(&self, date: NaiveDate) -> Result<Vec<Trade>, JournalError> {
        self.trades_uc.on_date(date).await
    }

    pub async fn trade_add(&self, draft: TradeDraft) -> Result<Trade, JournalError> {
        self.trades_uc.add(draft).await
    }

    pub async fn trade_update(&self, id: i64, draft: TradeDraft) -> Result<Trade, JournalError> {
        self.trades_uc.update(id, draft).await
    }

    pub async fn trade_delete(&self, id: i64) -> Result<(), JournalError> {
        self.trades_uc.delete(id).await
    }

    // Strategies
    pub async fn strategies(&self) -> Result<Vec<Strategy>, JournalError> {
        self.strategies_uc.list().await
    }

    pub async fn strategy_add(&self, draft: StrategyDraft) -> Result<Strategy, JournalError> {
        self.strategies_uc.add(draft).await
    }

    pub async fn strategy_update(
        &self,
        id: i64,
        draft: StrategyDraft,
    ) -> Result<Strategy, JournalError> {
        self.strategies_uc.update(id, draft).await
    }

    pub async fn strategy_delete(&self, id: i64) -> Result<(), JournalError> {
        self.strategies_uc.delete(id).await
    }

    // Psychology
    pub async fn psychology_entries(&self) -> Result<Vec<PsychologyEntry>, JournalError> {
        self.psychology_uc.list().await
    }

    pub async fn psychology_add(
        &self,
        draft: PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        self.psychology_uc.add(draft).await
    }

    pub async fn psychology_update(
        &self,
        id: i64,
        draft: PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        self.psychology_uc.update(id, draft).await
    }

    pub async fn psychology_delete(&self, id: i64) -> Result<(), JournalError> {
        self.psychology_uc.delete(id).await
    }

    // Analytics
    pub async fn stats(&self) -> Result<TradeStats, JournalError> {
        Ok(TradeStats::from_trades(&self.trades().await?))
    }

    pub async fn strategy_performance(&self) -> Result<Vec<StrategyPerformance>, JournalError> {
        Ok(grouping::strategy_performance(&self.trades().await?))
    }

    pub async fn daily_summaries(&self) -> Result<Vec<DaySummary>, JournalError> {
        Ok(grouping::daily_summaries(&self.trades().await?))
    }
}
