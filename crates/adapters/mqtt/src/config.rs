//! MQTT connection configuration.

use serde::Deserialize;

/// Configuration for the Hermes MQTT connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MqttConfig {
    /// MQTT broker hostname or IP address.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Optional broker username.
    pub username: Option<String>,
    /// Optional broker password, only used together with `username`.
    pub password: Option<String>,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
    /// Number of decoded intents that may wait for the router.
    pub intent_buffer: usize,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker_host: "localhost".to_string(),
            broker_port: 1883,
            client_id: "hasslights".to_string(),
            username: None,
            password: None,
            keep_alive_secs: 30,
            intent_buffer: 16,
        }
    }
}

impl MqttConfig {
    /// Apply a Snips-style broker address, either `host` or `host:port`.
    ///
    /// IPv6 hosts take a port only in brackets (`[::1]:1884`); a bare IPv6
    /// address is used as the host unchanged. An unparseable port leaves the
    /// current port untouched.
    pub fn set_broker_address(&mut self, address: &str) {
        let (host, port) = split_host_port(address);
        self.broker_host = host.to_string();
        if let Some(Ok(port)) = port.map(str::parse::<u16>) {
            self.broker_port = port;
        }
    }

    /// Credentials to authenticate with, if a username is configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref()?;
        Some((username, self.password.as_deref().unwrap_or_default()))
    }
}

fn split_host_port(address: &str) -> (&str, Option<&str>) {
    if let Some(rest) = address.strip_prefix('[')
        && let Some((host, tail)) = rest.split_once(']')
    {
        return (host, tail.strip_prefix(':'));
    }
    match address.split_once(':') {
        Some((host, port)) if !port.contains(':') => (host, Some(port)),
        _ => (address, None),
    }
}
