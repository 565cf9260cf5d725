//! # hasslights-adapter-mqtt
//!
//! MQTT adapter — speaks the Snips Hermes protocol.
//!
//! ## Responsibilities
//! - Connect to the MQTT broker and subscribe to `hermes/intent/#`
//! - Decode intent messages into domain [`Intent`]s
//! - Hand intents to the [`IntentRouter`] strictly one at a time
//! - Publish confirmations on `hermes/dialogueManager/startSession`
//!
//! ## How it works
//!
//! A background task drives the rumqttc event loop. It resubscribes after
//! every (re)connect and forwards decoded intents through a bounded channel.
//! [`HermesBus::serve`] drains that channel and awaits each intent before
//! taking the next one.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `hasslights-app` and `hasslights-domain`.

mod config;
mod dialogue;
mod error;
pub mod message;

pub use config::MqttConfig;
pub use dialogue::HermesDialogue;
pub use error::MqttError;

use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use hasslights_app::ports::{DialoguePublisher, ServiceCaller};
use hasslights_app::services::intent_router::IntentRouter;
use hasslights_domain::intent::Intent;

use message::{INTENT_TOPIC_FILTER, INTENT_TOPIC_PREFIX, IntentMessage};

/// Delay before polling again after a connection error.
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Capacity of the request queue between the client handle and the event loop.
const REQUEST_CAPACITY: usize = 64;

/// Connection to the Hermes bus.
pub struct HermesBus {
    client: AsyncClient,
    event_loop: EventLoop,
    intent_buffer: usize,
}

impl HermesBus {
    /// Prepare a connection with the given configuration.
    ///
    /// Nothing touches the network until [`serve`](Self::serve) runs.
    #[must_use]
    pub fn new(config: &MqttConfig) -> Self {
        let mut options = MqttOptions::new(
            config.client_id.as_str(),
            config.broker_host.as_str(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(config.keep_alive_secs)));
        if let Some((username, password)) = config.credentials() {
            options.set_credentials(username, password);
        }

        let (client, event_loop) = AsyncClient::new(options, REQUEST_CAPACITY);
        Self {
            client,
            event_loop,
            intent_buffer: config.intent_buffer.max(1),
        }
    }

    /// A [`DialoguePublisher`] sharing this connection.
    #[must_use]
    pub fn dialogue(&self) -> HermesDialogue {
        HermesDialogue::new(self.client.clone())
    }

    /// Serve intents until the event loop task ends.
    ///
    /// Intents are handled sequentially: the next one is not taken before
    /// the router finished the previous one, HTTP call included.
    pub async fn serve<C, D>(self, router: &IntentRouter<C, D>)
    where
        C: ServiceCaller + Send + Sync,
        D: DialoguePublisher + Send + Sync,
    {
        let (tx, mut rx) = mpsc::channel(self.intent_buffer);
        let driver = tokio::spawn(drive_event_loop(self.client, self.event_loop, tx));

        while let Some(intent) = rx.recv().await {
            router.handle_intent(&intent).await;
        }

        driver.abort();
        tracing::info!("hermes bus stopped");
    }
}

/// Poll the event loop forever, forwarding decoded intents to `tx`.
///
/// Never waits for the router, so keep-alives go out while an intent is
/// being handled. Intents arriving while the buffer is full are dropped.
/// Returns once the receiving side is gone.
async fn drive_event_loop(
    client: AsyncClient,
    mut event_loop: EventLoop,
    tx: mpsc::Sender<Intent>,
) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::info!("connected to MQTT broker");
                if let Err(err) = client.try_subscribe(INTENT_TOPIC_FILTER, QoS::AtLeastOnce) {
                    tracing::warn!(error = %err, "failed to subscribe to intents");
                }
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let Some(intent) = decode_intent(&publish.topic, &publish.payload) else {
                    continue;
                };
                if !forward(&tx, intent) {
                    return;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "MQTT connection error, retrying");
                tokio::time::sleep(RECONNECT_DELAY).await;
            }
        }
    }
}

/// Queue an intent for the router. Returns `false` once the router is gone.
fn forward(tx: &mpsc::Sender<Intent>, intent: Intent) -> bool {
    match tx.try_send(intent) {
        Ok(()) => true,
        Err(TrySendError::Full(intent)) => {
            tracing::warn!(
                intent = %intent.name,
                site_id = %intent.site_id,
                "intent buffer full, dropping intent"
            );
            true
        }
        Err(TrySendError::Closed(_)) => false,
    }
}

/// Decode an incoming publish, logging and dropping anything unusable.
fn decode_intent(topic: &str, payload: &[u8]) -> Option<Intent> {
    if !topic.starts_with(INTENT_TOPIC_PREFIX) {
        return None;
    }
    match IntentMessage::from_slice(payload).and_then(IntentMessage::into_intent) {
        Ok(intent) => {
            tracing::debug!(
                topic,
                intent = %intent.name,
                site_id = %intent.site_id,
                "intent received"
            );
            Some(intent)
        }
        Err(err) => {
            tracing::warn!(topic, error = %err, "dropping undecodable intent");
            None
        }
    }
}
