//! Service — the Home Assistant REST call an intent resolves to.
//!
//! | intent | lamp set | room set | neither |
//! |--------|----------|----------|---------|
//! | `s710:turnOnLight` | `light/turn_on` `light.<lamp>` | `homeassistant/turn_on` `group.lights_<room>` | same with `<site>` |
//! | `s710:turnOffLight` | `light/turn_off` `light.<lamp>` | `homeassistant/turn_off` `group.lights_<room>` | same with `<site>` |
//! | `s710:turnOnAllLights` | `homeassistant/turn_on` `group.all_lights` | | |
//! | `s710:turnOffAllLights` | `homeassistant/turn_off` `group.all_lights` | | |
//! | `s710:keepLightOn` | `automation/turn_on` `automation.lights_on_<lamp>` | same with `<room>` | same with `<site>` |
//! | `s710:keepLightOff` | `automation/turn_off` `automation.lights_on_<lamp>` | same with `<room>` | same with `<site>` |
//!
//! `keepLightOff` targets the `lights_on_` automation, the same entity as
//! `keepLightOn`; only the service differs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// The six intents this handler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    TurnOnLight,
    TurnOffLight,
    TurnOnAllLights,
    TurnOffAllLights,
    KeepLightOn,
    KeepLightOff,
}

impl IntentKind {
    /// Every recognized intent.
    pub const ALL: [Self; 6] = [
        Self::TurnOnLight,
        Self::TurnOffLight,
        Self::TurnOnAllLights,
        Self::TurnOffAllLights,
        Self::KeepLightOn,
        Self::KeepLightOff,
    ];

    /// Match a full intent name as published on the bus.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Full intent name, including the app namespace.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TurnOnLight => "s710:turnOnLight",
            Self::TurnOffLight => "s710:turnOffLight",
            Self::TurnOnAllLights => "s710:turnOnAllLights",
            Self::TurnOffAllLights => "s710:turnOffAllLights",
            Self::KeepLightOn => "s710:keepLightOn",
            Self::KeepLightOff => "s710:keepLightOff",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Home Assistant service endpoint targeted by a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceEndpoint {
    LightTurnOn,
    LightTurnOff,
    GroupTurnOn,
    GroupTurnOff,
    AutomationTurnOn,
    AutomationTurnOff,
}

impl ServiceEndpoint {
    /// Path relative to the Home Assistant base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::LightTurnOn => "/api/services/light/turn_on",
            Self::LightTurnOff => "/api/services/light/turn_off",
            Self::GroupTurnOn => "/api/services/homeassistant/turn_on",
            Self::GroupTurnOff => "/api/services/homeassistant/turn_off",
            Self::AutomationTurnOn => "/api/services/automation/turn_on",
            Self::AutomationTurnOff => "/api/services/automation/turn_off",
        }
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// JSON body of a service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub entity_id: String,
}

impl ServicePayload {
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
        }
    }
}

/// A resolved service call: where to POST and what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCall {
    pub endpoint: ServiceEndpoint,
    pub payload: ServicePayload,
}

impl ServiceCall {
    #[must_use]
    pub fn new(endpoint: ServiceEndpoint, entity_id: impl Into<String>) -> Self {
        Self {
            endpoint,
            payload: ServicePayload::new(entity_id),
        }
    }

    /// Resolve the call for an intent.
    ///
    /// The lamp identifier wins over the room identifier, which wins over
    /// the site. Returns `None` for intents this handler does not know.
    #[must_use]
    pub fn resolve(
        intent_name: &str,
        lamp_id: Option<&str>,
        room_id: Option<&str>,
        site_id: &str,
    ) -> Option<Self> {
        let kind = IntentKind::from_name(intent_name)?;
        let call = match kind {
            IntentKind::TurnOnLight => match (lamp_id, room_id) {
                (Some(lamp), _) => Self::new(ServiceEndpoint::LightTurnOn, format!("light.{lamp}")),
                (None, room) => Self::new(
                    ServiceEndpoint::GroupTurnOn,
                    format!("group.lights_{}", room.unwrap_or(site_id)),
                ),
            },
            IntentKind::TurnOffLight => match (lamp_id, room_id) {
                (Some(lamp), _) => {
                    Self::new(ServiceEndpoint::LightTurnOff, format!("light.{lamp}"))
                }
                (None, room) => Self::new(
                    ServiceEndpoint::GroupTurnOff,
                    format!("group.lights_{}", room.unwrap_or(site_id)),
                ),
            },
            IntentKind::TurnOnAllLights => {
                Self::new(ServiceEndpoint::GroupTurnOn, "group.all_lights")
            }
            IntentKind::TurnOffAllLights => {
                Self::new(ServiceEndpoint::GroupTurnOff, "group.all_lights")
            }
            IntentKind::KeepLightOn => Self::new(
                ServiceEndpoint::AutomationTurnOn,
                format!("automation.lights_on_{}", scope(lamp_id, room_id, site_id)),
            ),
            IntentKind::KeepLightOff => Self::new(
                ServiceEndpoint::AutomationTurnOff,
                format!("automation.lights_on_{}", scope(lamp_id, room_id, site_id)),
            ),
        };
        Some(call)
    }

    /// Resolve the call for a built [`Intent`].
    #[must_use]
    pub fn for_intent(intent: &Intent) -> Option<Self> {
        Self::resolve(
            &intent.name,
            intent.lamp_id.as_deref(),
            intent.room_id.as_deref(),
            &intent.site_id,
        )
    }
}

fn scope<'a>(lamp_id: Option<&'a str>, room_id: Option<&'a str>, site_id: &'a str) -> &'a str {
    lamp_id.or(room_id).unwrap_or(site_id)
}
