//! MQTT adapter error types.

use hasslights_domain::error::HassLightsError;

/// Errors specific to the MQTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The rumqttc client returned an error.
    #[error("MQTT client error")]
    Client(#[source] rumqttc::ClientError),

    /// Failed to parse an incoming MQTT payload as JSON.
    #[error("failed to parse MQTT payload")]
    PayloadParse(#[source] serde_json::Error),

    /// Failed to encode an outgoing payload.
    #[error("failed to encode MQTT payload")]
    PayloadEncode(#[source] serde_json::Error),

    /// A domain-level error (validation, …).
    #[error("domain error")]
    Domain(#[source] HassLightsError),
}

impl MqttError {
    /// Convert into a [`HassLightsError::Dialogue`] for propagation across
    /// port boundaries.
    pub fn into_domain(self) -> HassLightsError {
        match self {
            Self::Domain(err) => err,
            other => HassLightsError::Dialogue(Box::new(other)),
        }
    }
}

impl From<MqttError> for HassLightsError {
    fn from(err: MqttError) -> Self {
        err.into_domain()
    }
}
