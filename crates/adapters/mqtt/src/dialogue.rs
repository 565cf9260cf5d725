//! [`DialoguePublisher`] backed by the Hermes dialogue manager.

use rumqttc::{AsyncClient, QoS};

use hasslights_app::ports::DialoguePublisher;
use hasslights_domain::error::HassLightsError;

use crate::error::MqttError;
use crate::message::{START_SESSION_TOPIC, StartSession};

/// Publishes start-session notifications over MQTT.
///
/// Cheap to clone; all clones share the connection of the bus they came
/// from.
#[derive(Clone)]
pub struct HermesDialogue {
    client: AsyncClient,
}

impl HermesDialogue {
    pub(crate) fn new(client: AsyncClient) -> Self {
        Self { client }
    }
}

impl DialoguePublisher for HermesDialogue {
    async fn start_notification(&self, site_id: &str, text: &str) -> Result<(), HassLightsError> {
        let payload = StartSession::notification(site_id, text).to_vec()?;
        self.client
            .publish(START_SESSION_TOPIC, QoS::AtLeastOnce, false, payload)
            .await
            .map_err(MqttError::Client)?;
        tracing::debug!(site_id, text, "start session notification published");
        Ok(())
    }
}
