use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named trading setup. Trades reference strategies by name via
/// `which_setup`, not by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Strategy {
    pub fn from_draft(id: i64, draft: &StrategyDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_at: Utc::now(),
        }
    }
}
