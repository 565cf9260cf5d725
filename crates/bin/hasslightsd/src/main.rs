//! # hasslightsd — voice-controlled lights daemon
//!
//! Composition root that wires all adapters together and serves intents.
//!
//! ## Responsibilities
//! - Initialise logging from `HASSLIGHTS_LOG` / `RUST_LOG`
//! - Load `config.ini` and `/etc/snips.toml` (paths overridable via env)
//! - Construct the Home Assistant client and the Hermes bus connection
//! - Construct the intent router, injecting both via port traits
//! - Serve intents until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod settings;

use tracing_subscriber::EnvFilter;

use hasslights_adapter_http_reqwest::HassClient;
use hasslights_adapter_mqtt::HermesBus;
use hasslights_app::services::intent_router::IntentRouter;

use settings::{Config, ConfigPaths, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging
    let logging = LoggingConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.filter))
        .init();

    // Configuration
    let config = Config::load(&ConfigPaths::from_env())?;

    // Adapters
    let caller = HassClient::new(config.hass)?;
    tracing::info!(
        user = config.mqtt.username.as_deref().unwrap_or("-"),
        host = %config.mqtt.broker_host,
        port = config.mqtt.broker_port,
        "connecting to MQTT broker"
    );
    let bus = HermesBus::new(&config.mqtt);

    // Use-case
    let router = IntentRouter::new(caller, bus.dialogue(), config.phrases);

    tokio::select! {
        () = bus.serve(&router) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
