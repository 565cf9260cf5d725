//! Configuration loading — the action's `config.ini` plus the system-wide
//! `/etc/snips.toml`, with environment variable overrides.
//!
//! Either file may be missing or broken: the failure is logged and loading
//! continues with what is left. The Home Assistant host and token are the
//! only required values and are checked last.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use hasslights_adapter_http_reqwest::HassConfig;
use hasslights_adapter_mqtt::MqttConfig;
use hasslights_domain::confirmation::ConfirmationPhrases;

const DEFAULT_SECRET_PATH: &str = "config.ini";
const DEFAULT_SNIPS_PATH: &str = "/etc/snips.toml";
const DEFAULT_LOG_FILTER: &str = "hasslights=info";

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Home Assistant connection.
    pub hass: HassConfig,
    /// Spoken confirmations.
    pub phrases: ConfirmationPhrases,
    /// MQTT broker connection.
    pub mqtt: MqttConfig,
}

/// Where the configuration files live.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// INI file with a `[secret]` section.
    pub secret: PathBuf,
    /// Snips platform TOML with a `[snips-common]` table.
    pub snips: PathBuf,
}

/// Logging configuration, read from the environment only so that it is
/// available before any file is loaded.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// `[secret]` section of `config.ini`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SecretSection {
    hass_host: Option<String>,
    hass_token: Option<String>,
    hass_timeout_secs: Option<u64>,
    confirmation_success: Option<String>,
    confirmation_failure: Option<String>,
}

/// The parts of `/etc/snips.toml` this daemon reads.
#[derive(Debug, Default, Deserialize)]
struct SnipsToml {
    #[serde(rename = "snips-common", default)]
    common: SnipsCommon,
}

/// `[snips-common]` table of `/etc/snips.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnipsCommon {
    mqtt: Option<String>,
    mqtt_username: Option<String>,
    mqtt_password: Option<String>,
}

impl Config {
    /// Load both files, apply environment overrides, and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the Home Assistant host or
    /// token is missing. Unreadable files are not errors.
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let mut secret = SecretSection::from_file(&paths.secret).unwrap_or_else(|err| {
            tracing::warn!(path = %paths.secret.display(), error = %err, "failed to read action config");
            SecretSection::default()
        });
        let snips = SnipsCommon::from_file(&paths.snips).unwrap_or_else(|err| {
            tracing::warn!(path = %paths.snips.display(), error = %err, "failed to read snips config");
            SnipsCommon::default()
        });
        secret.apply_env_overrides();
        Self::from_sections(secret, snips)
    }

    fn from_sections(secret: SecretSection, snips: SnipsCommon) -> Result<Self, ConfigError> {
        let base_url = required(secret.hass_host, "hass_host")?;
        let token = required(secret.hass_token, "hass_token")?;
        let mut hass = HassConfig::new(base_url, token);
        if let Some(timeout_secs) = secret.hass_timeout_secs {
            hass.timeout_secs = timeout_secs;
        }

        let defaults = ConfirmationPhrases::default();
        let phrases = ConfirmationPhrases {
            success: secret.confirmation_success.unwrap_or(defaults.success),
            failure: secret.confirmation_failure.unwrap_or(defaults.failure),
        };

        let mut mqtt = MqttConfig::default();
        if let Some(address) = snips.mqtt.as_deref() {
            mqtt.set_broker_address(address);
        }
        mqtt.username = snips.mqtt_username;
        mqtt.password = snips.mqtt_password;

        let config = Self {
            hass,
            phrases,
            mqtt,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hass.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "hass_timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Validation(format!("[secret] {key} is required")))
}

impl SecretSection {
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let ini = ::config::Config::builder()
            .add_source(::config::File::new(
                &path.to_string_lossy(),
                ::config::FileFormat::Ini,
            ))
            .build()?;
        Ok(ini.get("secret")?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HASSLIGHTS_HASS_HOST") {
            self.hass_host = Some(val);
        }
        if let Ok(val) = std::env::var("HASSLIGHTS_HASS_TOKEN") {
            self.hass_token = Some(val);
        }
    }
}

impl SnipsCommon {
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let parsed: SnipsToml = toml::from_str(&content)?;
        Ok(parsed.common)
    }
}

impl ConfigPaths {
    /// Resolve file locations from `HASSLIGHTS_CONFIG` and
    /// `HASSLIGHTS_SNIPS_CONFIG`, falling back to the Snips defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var_os("HASSLIGHTS_CONFIG")
                .map_or_else(|| PathBuf::from(DEFAULT_SECRET_PATH), PathBuf::from),
            snips: std::env::var_os("HASSLIGHTS_SNIPS_CONFIG")
                .map_or_else(|| PathBuf::from(DEFAULT_SNIPS_PATH), PathBuf::from),
        }
    }
}

impl LoggingConfig {
    /// Read the filter from `HASSLIGHTS_LOG`, then `RUST_LOG`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(val) = std::env::var("HASSLIGHTS_LOG") {
            config.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            config.filter = val;
        }
        config
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// INI load or deserialization failure.
    #[error("failed to load INI config")]
    Ini(#[from] ::config::ConfigError),
    /// TOML parse failure.
    #[error("failed to parse TOML config")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
