//! Channel configuration.

use url::Url;
use uuid::Uuid;

use crate::error::{ChannelError, ChannelResult};

/// Push channel configuration.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// WebSocket endpoint, e.g. `ws://127.0.0.1:14562/ws`
    pub url: String,
    /// Client identifier sent as a query parameter
    pub client_id: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:14562/ws".to_string(),
            client_id: Uuid::new_v4().to_string(),
        }
    }
}

impl ChannelConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("SCOOP_WS_URL")
                .unwrap_or_else(|_| "ws://127.0.0.1:14562/ws".to_string()),
            client_id: Uuid::new_v4().to_string(),
        }
    }

    /// Build a config pointing at an explicit endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The full connect URL including the client id.
    pub fn connect_url(&self) -> ChannelResult<Url> {
        let mut url =
            Url::parse(&self.url).map_err(|e| ChannelError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("clientId", &self.client_id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_url_carries_client_id() {
        let mut config = ChannelConfig::with_url("ws://h:1/ws");
        config.client_id = "abc".to_string();
        assert_eq!(config.connect_url().unwrap().as_str(), "ws://h:1/ws?clientId=abc");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let config = ChannelConfig::with_url("not a url");
        assert!(config.connect_url().is_err());
    }
}
