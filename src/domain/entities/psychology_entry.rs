use crate::domain::entities::trade::lenient_amount;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A daily reflection entry. Canonical granularity is one entry per day;
/// `daily_pnl` is the day's aggregate as a decimal string, and the best/worst
/// trade ids are weak references that are never validated against the trade
/// sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologyEntry {
    pub id: i64,
    pub entry_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub daily_pnl: Option<String>,
    #[serde(default)]
    pub best_trade_id: Option<i64>,
    #[serde(default)]
    pub worst_trade_id: Option<i64>,
    pub mental_reflections: String,
    pub improvement_areas: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologyDraft {
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub daily_pnl: Option<String>,
    #[serde(default)]
    pub best_trade_id: Option<i64>,
    #[serde(default)]
    pub worst_trade_id: Option<i64>,
    pub mental_reflections: String,
    pub improvement_areas: String,
}

impl PsychologyEntry {
    pub fn from_draft(id: i64, draft: &PsychologyDraft) -> Self {
        Self {
            id,
            entry_date: draft.entry_date,
            daily_pnl: draft.daily_pnl.clone(),
            best_trade_id: draft.best_trade_id,
            worst_trade_id: draft.worst_trade_id,
            mental_reflections: draft.mental_reflections.clone(),
            improvement_areas: draft.improvement_areas.clone(),
            created_at: Utc::now(),
        }
    }
}
