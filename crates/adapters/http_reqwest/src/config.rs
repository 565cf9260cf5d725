//! Home Assistant connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the Home Assistant REST client.
///
/// `base_url` and `token` have no defaults: without them there is nothing
/// to call.
#[derive(Debug, Clone, Deserialize)]
pub struct HassConfig {
    /// Base URL of the Home Assistant instance, e.g. `http://hass.local:8123`.
    pub base_url: String,
    /// Long-lived access token sent as a bearer token.
    pub token: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl HassConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of a service endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
