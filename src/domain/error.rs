use thiserror::Error;

/// Every failure mode the journal surfaces. One variant per distinguishable
/// cause so callers can tell a missing config from a server-side rejection.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Remote store not configured: {0}")]
    NotConfigured(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    // Server-side {error} payload, surfaced verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<String> for JournalError {
    fn from(s: String) -> Self {
        JournalError::InvalidInput(s)
    }
}
