use super::envelope::{actions, Envelope};
use super::transport::{CallbackTransport, DirectTransport, ProxyTransport, Transport};
use crate::config::{JournalConfig, TransportMode};
use crate::domain::entities::psychology_entry::{PsychologyDraft, PsychologyEntry};
use crate::domain::entities::strategy::{Strategy, StrategyDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::JournalError;
use crate::domain::ports::journal_store::JournalStore;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Single point of contact with the spreadsheet script endpoint. Every
/// entity operation is a thin named wrapper over one dispatch primitive, so
/// all of them share the same error behavior.
pub struct SheetsClient {
    transport: Arc<dyn Transport>,
    sheet_id: String,
}

impl SheetsClient {
    pub fn from_config(config: &JournalConfig) -> Result<Self, JournalError> {
        let script_url = config
            .script_url
            .clone()
            .ok_or_else(|| JournalError::NotConfigured("JOURNAL_SCRIPT_URL is not set".into()))?;
        let sheet_id = config
            .sheet_id
            .clone()
            .ok_or_else(|| JournalError::NotConfigured("JOURNAL_SHEET_ID is not set".into()))?;

        let transport: Arc<dyn Transport> = match config.transport {
            TransportMode::Direct => Arc::new(DirectTransport::new(script_url)),
            TransportMode::Proxy => Arc::new(ProxyTransport::new(config.proxy_url.clone())),
            TransportMode::Callback => {
                Arc::new(CallbackTransport::new(script_url, config.timeout))
            }
        };
        Ok(Self::with_transport(transport, sheet_id))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, sheet_id: impl Into<String>) -> Self {
        Self {
            transport,
            sheet_id: sheet_id.into(),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        action: &str,
        data: Value,
    ) -> Result<T, JournalError> {
        let envelope = Envelope::new(action, &self.sheet_id, data);
        let value = self.transport.dispatch(&envelope).await?;
        serde_json::from_value(value)
            .map_err(|e| JournalError::Parse(format!("{action} response: {e}")))
    }

    /// Mutation envelope: the draft's fields with the row id spliced in,
    /// matching what the script expects for update actions.
    fn with_id<D: Serialize>(id: i64, draft: &D) -> Result<Value, JournalError> {
        let mut data =
            serde_json::to_value(draft).map_err(|e| JournalError::Parse(e.to_string()))?;
        if let Value::Object(map) = &mut data {
            map.insert("id".into(), json!(id));
        }
        Ok(data)
    }

    fn to_value<D: Serialize>(draft: &D) -> Result<Value, JournalError> {
        serde_json::to_value(draft).map_err(|e| JournalError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl JournalStore for SheetsClient {
    async fn get_trades(&self) -> Result<Vec<Trade>, JournalError> {
        self.request(actions::GET_TRADES, json!({})).await
    }

    async fn get_trades_by_date(&self, date: NaiveDate) -> Result<Vec<Trade>, JournalError> {
        let data = json!({ "date": date.format("%Y-%m-%d").to_string() });
        self.request(actions::GET_TRADES_BY_DATE, data).await
    }

    async fn add_trade(&self, draft: &TradeDraft) -> Result<Trade, JournalError> {
        self.request(actions::ADD_TRADE, Self::to_value(draft)?).await
    }

    async fn update_trade(&self, id: i64, draft: &TradeDraft) -> Result<Trade, JournalError> {
        self.request(actions::UPDATE_TRADE, Self::with_id(id, draft)?)
            .await
    }

    async fn delete_trade(&self, id: i64) -> Result<(), JournalError> {
        let _: Value = self.request(actions::DELETE_TRADE, json!({ "id": id })).await?;
        Ok(())
    }

    async fn get_strategies(&self) -> Result<Vec<Strategy>, JournalError> {
        self.request(actions::GET_STRATEGIES, json!({})).await
    }

    async fn add_strategy(&self, draft: &StrategyDraft) -> Result<Strategy, JournalError> {
        self.request(actions::ADD_STRATEGY, Self::to_value(draft)?)
            .await
    }

    async fn update_strategy(
        &self,
        id: i64,
        draft: &StrategyDraft,
    ) -> Result<Strategy, JournalError> {
        self.request(actions::UPDATE_STRATEGY, Self::with_id(id, draft)?)
            .await
    }

    async fn delete_strategy(&self, id: i64) -> Result<(), JournalError> {
        let _: Value = self
            .request(actions::DELETE_STRATEGY, json!({ "id": id }))
            .await?;
        Ok(())
    }

    async fn get_psychology_entries(&self) -> Result<Vec<PsychologyEntry>, JournalError> {
        self.request(actions::GET_PSYCHOLOGY_ENTRIES, json!({})).await
    }

    async fn add_psychology_entry(
        &self,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        self.request(actions::ADD_PSYCHOLOGY_ENTRY, Self::to_value(draft)?)
            .await
    }

    async fn update_psychology_entry(
        &self,
        id: i64,
        draft: &PsychologyDraft,
    ) -> Result<PsychologyEntry, JournalError> {
        self.request(actions::UPDATE_PSYCHOLOGY_ENTRY, Self::with_id(id, draft)?)
            .await
    }

    async fn delete_psychology_entry(&self, id: i64) -> Result<(), JournalError> {
        let _: Value = self
            .request(actions::DELETE_PSYCHOLOGY_ENTRY, json!({ "id": id }))
            .await?;
        Ok(())
    }
}
