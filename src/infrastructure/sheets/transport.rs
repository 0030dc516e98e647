//! Transport strategies for the script endpoint.
//!
//! All three produce the same logical contract: resolve with the unwrapped
//! `data` payload or reject with a [`JournalError`], exactly one settlement
//! per call, no retries.

use super::envelope::{unwrap_response, Envelope};
use crate::domain::error::JournalError;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, envelope: &Envelope) -> Result<Value, JournalError>;
}

/// Same-origin POST straight to the script endpoint (production mode).
pub struct DirectTransport {
    client: reqwest::Client,
    url: String,
}

impl DirectTransport {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl Transport for DirectTransport {
    async fn dispatch(&self, envelope: &Envelope) -> Result<Value, JournalError> {
        post_envelope(&self.client, &self.url, envelope).await
    }
}

/// POST to a local forwarding endpoint that relays the same envelope to the
/// script (development mode, sidesteps browser cross-origin restrictions).
pub struct ProxyTransport {
    client: reqwest::Client,
    url: String,
}

impl ProxyTransport {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl Transport for ProxyTransport {
    async fn dispatch(&self, envelope: &Envelope) -> Result<Value, JournalError> {
        post_envelope(&self.client, &self.url, envelope).await
    }
}

async fn post_envelope(
    client: &reqwest::Client,
    url: &str,
    envelope: &Envelope,
) -> Result<Value, JournalError> {
    tracing::debug!(action = %envelope.action, url, "dispatching envelope");
    let resp = client
        .post(url)
        .json(envelope)
        .send()
        .await
        .map_err(|e| JournalError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(action = %envelope.action, status = status.as_u16(), "request failed");
        return Err(JournalError::Http(status.as_u16()));
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| JournalError::Parse(e.to_string()))?;
    unwrap_response(body)
}

/// Cross-origin GET with the envelope flattened into query parameters and a
/// per-call callback identifier; the server replies with the JSON wrapped in
/// `<id>(...)` padding.
///
/// Each call registers its identifier in a scoped pending table and removes
/// it on every exit path — success, HTTP error, transport error or the
/// timeout — via an RAII guard, so no handler outlives its call.
pub struct CallbackTransport {
    client: reqwest::Client,
    url: String,
    pending: Arc<Mutex<HashSet<String>>>,
    timeout: Duration,
}

impl CallbackTransport {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            pending: Arc::new(Mutex::new(HashSet::new())),
            timeout,
        }
    }

    /// Number of calls currently awaiting a response. Zero whenever no call
    /// is in flight.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    async fn roundtrip(
        &self,
        envelope: &Envelope,
        callback_id: &str,
    ) -> Result<Value, JournalError> {
        let data = serde_json::to_string(&envelope.data)
            .map_err(|e| JournalError::Parse(e.to_string()))?;

        tracing::debug!(action = %envelope.action, callback_id, "dispatching callback request");
        let resp = self
            .client
            .get(&self.url)
            .query(&[
                ("action", envelope.action.as_str()),
                ("sheetId", envelope.sheet_id.as_str()),
                ("data", data.as_str()),
                ("callback", callback_id),
            ])
            .send()
            .await
            .map_err(|e| JournalError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(action = %envelope.action, status = status.as_u16(), "request failed");
            return Err(JournalError::Http(status.as_u16()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| JournalError::Transport(e.to_string()))?;
        let body = strip_padding(&text, callback_id)?;
        let value: Value =
            serde_json::from_str(body).map_err(|e| JournalError::Parse(e.to_string()))?;
        unwrap_response(value)
    }
}

#[async_trait::async_trait]
impl Transport for CallbackTransport {
    async fn dispatch(&self, envelope: &Envelope) -> Result<Value, JournalError> {
        let callback_id = format!("cb_{}", uuid::Uuid::new_v4().simple());
        let _guard = PendingGuard::register(self.pending.clone(), callback_id.clone());

        match tokio::time::timeout(self.timeout, self.roundtrip(envelope, &callback_id)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(action = %envelope.action, callback_id, "callback request timed out");
                Err(JournalError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}

/// Extract the JSON body from `<id>(<json>)` padding. A trailing `;` is
/// tolerated; a response padded with someone else's identifier is a
/// transport error.
fn strip_padding<'a>(text: &'a str, callback_id: &str) -> Result<&'a str, JournalError> {
    let trimmed = text.trim().trim_end_matches(';').trim_end();
    let inner = trimmed
        .strip_suffix(')')
        .ok_or_else(|| JournalError::Transport("malformed callback padding".into()))?;
    let prefix = format!("{callback_id}(");
    inner
        .strip_prefix(prefix.as_str())
        .ok_or_else(|| JournalError::Transport("callback identifier mismatch".into()))
}

struct PendingGuard {
    pending: Arc<Mutex<HashSet<String>>>,
    callback_id: String,
}

impl PendingGuard {
    fn register(pending: Arc<Mutex<HashSet<String>>>, callback_id: String) -> Self {
        if let Ok(mut set) = pending.lock() {
            set.insert(callback_id.clone());
        }
        Self {
            pending,
            callback_id,
        }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Ok(mut set) = self.pending.lock() {
            set.remove(&self.callback_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_padding() {
        assert_eq!(
            strip_padding("cb_1({\"data\":[]})", "cb_1").unwrap(),
            "{\"data\":[]}"
        );
        assert_eq!(
            strip_padding("  cb_1({\"a\":1});\n", "cb_1").unwrap(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_strip_padding_mismatched_id() {
        let err = strip_padding("cb_other({})", "cb_1").unwrap_err();
        assert!(matches!(err, JournalError::Transport(_)));
    }

    #[test]
    fn test_strip_padding_malformed() {
        let err = strip_padding("{\"data\":[]}", "cb_1").unwrap_err();
        assert!(matches!(err, JournalError::Transport(_)));
    }

    #[test]
    fn test_pending_guard_cleans_up() {
        let pending = Arc::new(Mutex::new(HashSet::new()));
        {
            let _guard = PendingGuard::register(pending.clone(), "cb_x".into());
            assert_eq!(pending.lock().unwrap().len(), 1);
        }
        assert!(pending.lock().unwrap().is_empty());
    }
}
