use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lenient parse for spreadsheet money cells. The sheet stores amounts as
/// decimal strings; a missing, blank or garbled cell coerces to 0.0 rather
/// than failing the whole read.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Lenient wire shape for money cells: the sheet may hand back a string, a
/// bare number, null or nothing at all for the same column. Anything that
/// is not a string or number becomes `None` and coerces to 0 downstream;
/// a single odd cell must never reject the whole response.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// A single journaled trade. Field names match the spreadsheet columns
/// (camelCase on the wire); monetary fields stay decimal strings as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: i64,
    pub trade_date: NaiveDate,
    pub stock_name: String,
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub entry_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub exit_price: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub stop_loss: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub target_price: Option<String>,
    /// Derived at write time from entry/exit price and quantity; stored,
    /// not recomputed on read.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub profit_loss: Option<String>,
    #[serde(default)]
    pub setup_followed: bool,
    /// Strategy tag, referenced by name. No referential integrity.
    #[serde(default)]
    pub which_setup: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub psychology_reflections: Option<String>,
    #[serde(default)]
    pub screenshot_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    /// Stored profit/loss as a number; missing or malformed values coerce
    /// to 0.0.
    pub fn pnl(&self) -> f64 {
        parse_amount(self.profit_loss.as_deref())
    }

    pub fn is_open(&self) -> bool {
        self.exit_price
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .is_none()
    }

    /// Materialize a draft with a store-assigned identifier. Mirrors what
    /// the remote script does on insert; the in-memory store uses it.
    pub fn from_draft(id: i64, draft: &TradeDraft) -> Self {
        Self {
            id,
            trade_date: draft.trade_date,
            stock_name: draft.stock_name.clone(),
            quantity: draft.quantity,
            entry_price: Some(draft.entry_price.clone()),
            exit_price: draft.exit_price.clone(),
            stop_loss: draft.stop_loss.clone(),
            target_price: draft.target_price.clone(),
            profit_loss: Some(draft.profit_loss.clone().unwrap_or_else(|| "0".into())),
            setup_followed: draft.setup_followed,
            which_setup: draft.which_setup.clone(),
            emotion: draft.emotion.clone(),
            notes: draft.notes.clone(),
            psychology_reflections: draft.psychology_reflections.clone(),
            screenshot_link: draft.screenshot_link.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Trade as submitted by the user: everything except the store-assigned
/// identifier and timestamp. `profit_loss` is optional here because the
/// trades use case derives it before the draft reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDraft {
    pub trade_date: NaiveDate,
    pub stock_name: String,
    pub quantity: i64,
    pub entry_price: String,
    #[serde(default)]
    pub exit_price: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<String>,
    #[serde(default)]
    pub target_price: Option<String>,
    #[serde(default)]
    pub profit_loss: Option<String>,
    #[serde(default)]
    pub setup_followed: bool,
    #[serde(default)]
    pub which_setup: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub psychology_reflections: Option<String>,
    #[serde(default)]
    pub screenshot_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_lenient() {
        assert_eq!(parse_amount(Some("150.50")), 150.50);
        assert_eq!(parse_amount(Some("  -42.0 ")), -42.0);
        assert_eq!(parse_amount(Some("")), 0.0);
        assert_eq!(parse_amount(Some("n/a")), 0.0);
        assert_eq!(parse_amount(None), 0.0);
    }

    #[test]
    fn test_trade_json_tolerates_odd_money_cells() {
        // Null, numeric and absent amount columns all land as rows, not
        // deserialization failures.
        let trade: Trade = serde_json::from_str(
            r#"{"id":1,"tradeDate":"2025-03-10","stockName":"RELIANCE","quantity":10,
                "entryPrice":100.5,"profitLoss":null,"createdAt":"2025-03-10T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(trade.entry_price.as_deref(), Some("100.5"));
        assert!(trade.profit_loss.is_none());
        assert_eq!(trade.pnl(), 0.0);
        assert!(trade.is_open());
    }

    #[test]
    fn test_draft_json_defaults() {
        let draft: TradeDraft = serde_json::from_str(
            r#"{"tradeDate":"2025-03-10","stockName":"RELIANCE","quantity":10,"entryPrice":"100"}"#,
        )
        .unwrap();
        assert_eq!(draft.stock_name, "RELIANCE");
        assert!(draft.exit_price.is_none());
        assert!(!draft.setup_followed);
        assert!(draft.profit_loss.is_none());
    }
}
