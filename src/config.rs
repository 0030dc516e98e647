use crate::domain::error::JournalError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which transport reaches the script endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// POST straight to the script URL (production builds).
    Direct,
    /// POST to a local forwarding endpoint (development).
    Proxy,
    /// GET with callback padding (cross-origin static hosting).
    Callback,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Direct => write!(f, "direct"),
            TransportMode::Proxy => write!(f, "proxy"),
            TransportMode::Callback => write!(f, "callback"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(TransportMode::Direct),
            "proxy" => Ok(TransportMode::Proxy),
            "callback" | "jsonp" => Ok(TransportMode::Callback),
            _ => Err(format!("Unknown transport mode: {s}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JournalConfig {
    pub script_url: Option<String>,
    pub sheet_id: Option<String>,
    pub transport: TransportMode,
    pub proxy_url: String,
    pub timeout: Duration,
}

impl JournalConfig {
    pub fn from_env() -> Result<Self, JournalError> {
        dotenvy::dotenv().ok();

        let transport: TransportMode = env_var_or("JOURNAL_TRANSPORT", "direct")
            .parse()
            .map_err(JournalError::InvalidInput)?;
        let timeout_secs = env_var_or("JOURNAL_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| JournalError::InvalidInput(format!("JOURNAL_TIMEOUT_SECS: {e}")))?;

        Ok(Self {
            script_url: env_var("JOURNAL_SCRIPT_URL"),
            sheet_id: env_var("JOURNAL_SHEET_ID"),
            transport,
            proxy_url: env_var_or("JOURNAL_PROXY_URL", "http://localhost:3000/api/google-sheets"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Both the script URL and the sheet id are required for any remote
    /// operation; without them the journal runs against the disabled store.
    pub fn is_configured(&self) -> bool {
        self.script_url.is_some() && self.sheet_id.is_some()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_var_or(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_parse() {
        assert_eq!("direct".parse::<TransportMode>().unwrap(), TransportMode::Direct);
        assert_eq!("JSONP".parse::<TransportMode>().unwrap(), TransportMode::Callback);
        assert!("carrier-pigeon".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_is_configured_requires_both() {
        let mut config = JournalConfig {
            script_url: Some("https://script.example/exec".into()),
            sheet_id: None,
            transport: TransportMode::Direct,
            proxy_url: "http://localhost:3000/api/google-sheets".into(),
            timeout: Duration::from_secs(30),
        };
        assert!(!config.is_configured());
        config.sheet_id = Some("sheet-1".into());
        assert!(config.is_configured());
    }
}
