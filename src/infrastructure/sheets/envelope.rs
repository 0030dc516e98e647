use crate::domain::error::JournalError;
use serde::Serialize;
use serde_json::Value;

/// The request shape multiplexing every entity operation through the single
/// script endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub action: String,
    pub sheet_id: String,
    pub data: Value,
}

impl Envelope {
    pub fn new(action: &str, sheet_id: &str, data: Value) -> Self {
        Self {
            action: action.to_string(),
            sheet_id: sheet_id.to_string(),
            data,
        }
    }
}

/// Every action the script endpoint recognizes.
pub mod actions {
    pub const GET_TRADES: &str = "getTrades";
    pub const ADD_TRADE: &str = "addTrade";
    pub const UPDATE_TRADE: &str = "updateTrade";
    pub const DELETE_TRADE: &str = "deleteTrade";
    pub const GET_TRADES_BY_DATE: &str = "getTradesByDate";
    pub const GET_STRATEGIES: &str = "getStrategies";
    pub const ADD_STRATEGY: &str = "addStrategy";
    pub const UPDATE_STRATEGY: &str = "updateStrategy";
    pub const DELETE_STRATEGY: &str = "deleteStrategy";
    pub const GET_PSYCHOLOGY_ENTRIES: &str = "getPsychologyEntries";
    pub const ADD_PSYCHOLOGY_ENTRY: &str = "addPsychologyEntry";
    pub const UPDATE_PSYCHOLOGY_ENTRY: &str = "updatePsychologyEntry";
    pub const DELETE_PSYCHOLOGY_ENTRY: &str = "deletePsychologyEntry";
}

/// Unwrap a response body: a `{"error": ...}` payload rejects with the
/// server's message verbatim, otherwise the `data` payload (or, for older
/// script versions that reply bare, the whole body) resolves.
pub fn unwrap_response(value: Value) -> Result<Value, JournalError> {
    if let Some(err) = value.get("error").and_then(Value::as_str) {
        return Err(JournalError::Remote(err.to_string()));
    }
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => Ok(data),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_data_payload() {
        let value = json!({"data": [1, 2, 3]});
        assert_eq!(unwrap_response(value).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_unwrap_error_verbatim() {
        let value = json!({"error": "Sheet not found"});
        match unwrap_response(value) {
            Err(JournalError::Remote(msg)) => assert_eq!(msg, "Sheet not found"),
            other => panic!("expected Remote error, got {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_bare_body() {
        let value = json!({"id": 7, "stockName": "X"});
        assert_eq!(unwrap_response(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let env = Envelope::new("getTrades", "sheet-1", json!({}));
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire, json!({"action": "getTrades", "sheetId": "sheet-1", "data": {}}));
    }
}
