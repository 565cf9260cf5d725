//! Hermes wire format — the JSON published by the Snips platform.
//!
//! Only the fields the handler needs are modelled. Everything beyond the
//! intent name and site id is optional. A `slots` field that is not a list
//! is treated as empty, and list entries that do not match the expected
//! shape are skipped one by one instead of failing the message.

use serde::{Deserialize, Serialize};

use hasslights_domain::intent::Intent;

use crate::error::MqttError;

/// Wildcard subscription covering every recognized intent.
pub const INTENT_TOPIC_FILTER: &str = "hermes/intent/#";

/// Prefix of the topics intents are published on.
pub const INTENT_TOPIC_PREFIX: &str = "hermes/intent/";

/// Topic the dialogue manager listens on for new sessions.
pub const START_SESSION_TOPIC: &str = "hermes/dialogueManager/startSession";

/// An intent as published on `hermes/intent/<intentName>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMessage {
    pub site_id: String,
    pub intent: IntentClassification,
    #[serde(default)]
    slots: serde_json::Value,
}

/// The classifier result attached to an intent message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentClassification {
    pub intent_name: String,
}

/// A single recognized slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub slot_name: String,
    #[serde(default)]
    pub value: Option<SlotValue>,
}

/// The resolved value of a slot, e.g. `{"kind": "Custom", "value": "Küche"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Slot {
    /// The textual slot value, if the slot carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.value.as_ref()?.value.as_str()
    }
}

impl IntentMessage {
    /// Decode a raw MQTT payload.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::PayloadParse`] when the payload is not JSON or
    /// lacks the intent name or site id.
    pub fn from_slice(payload: &[u8]) -> Result<Self, MqttError> {
        serde_json::from_slice(payload).map_err(MqttError::PayloadParse)
    }

    /// Slots that match the expected shape, in order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|raw| serde_json::from_value(raw.clone()).ok())
    }

    /// Convert into a domain [`Intent`], normalizing slot identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Domain`] if the intent name or site id is empty.
    pub fn into_intent(self) -> Result<Intent, MqttError> {
        let builder = self.slots().fold(
            Intent::builder()
                .name(self.intent.intent_name.as_str())
                .site_id(self.site_id.as_str()),
            |builder, slot| builder.slot(&slot.slot_name, slot.text()),
        );
        builder.build().map_err(MqttError::Domain)
    }
}

/// Payload for `hermes/dialogueManager/startSession`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSession<'a> {
    pub site_id: &'a str,
    pub init: SessionInit<'a>,
}

/// How a new session starts.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionInit<'a> {
    /// Speak `text` and end the session immediately.
    Notification { text: &'a str },
}

impl<'a> StartSession<'a> {
    #[must_use]
    pub fn notification(site_id: &'a str, text: &'a str) -> Self {
        Self {
            site_id,
            init: SessionInit::Notification { text },
        }
    }

    /// Encode as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::PayloadEncode`] if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, MqttError> {
        serde_json::to_vec(self).map_err(MqttError::PayloadEncode)
    }
}
