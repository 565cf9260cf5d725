//! Intent — a recognized voice command addressed to the lights handler.
//!
//! Slot extraction is best-effort: the first `lightType` value becomes the
//! lamp identifier, the first `roomName` value becomes the room identifier,
//! and anything missing or malformed simply leaves the identifier unset.

use crate::error::{HassLightsError, ValidationError};

/// Slot carrying the lamp (device) identifier.
pub const LAMP_SLOT: &str = "lightType";

/// Slot carrying the room identifier.
pub const ROOM_SLOT: &str = "roomName";

/// A voice command with its normalized identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// Full intent name as published on the bus (e.g. `s710:turnOnLight`).
    pub name: String,
    /// Site the command was spoken at; also the reply destination.
    pub site_id: String,
    /// Normalized lamp identifier from the `lightType` slot.
    pub lamp_id: Option<String>,
    /// Normalized room identifier from the `roomName` slot.
    pub room_id: Option<String>,
}

impl Intent {
    /// Create a builder for constructing an [`Intent`].
    #[must_use]
    pub fn builder() -> IntentBuilder {
        IntentBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HassLightsError::Validation`] when the name or site id is
    /// empty.
    pub fn validate(&self) -> Result<(), HassLightsError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyIntentName.into());
        }
        if self.site_id.is_empty() {
            return Err(ValidationError::EmptySiteId.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Intent`].
///
/// Identifiers are normalized as they are recorded, so the built intent
/// never holds raw spoken values.
#[derive(Debug, Default)]
pub struct IntentBuilder {
    name: Option<String>,
    site_id: Option<String>,
    lamp_id: Option<String>,
    room_id: Option<String>,
}

impl IntentBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn lamp_id(mut self, raw: &str) -> Self {
        self.lamp_id = Some(normalize_identifier(raw));
        self
    }

    #[must_use]
    pub fn room_id(mut self, raw: &str) -> Self {
        self.room_id = Some(normalize_identifier(raw));
        self
    }

    /// Record a slot value. Only the first value of [`LAMP_SLOT`] and
    /// [`ROOM_SLOT`] is kept; other slots and missing values are ignored.
    #[must_use]
    pub fn slot(self, slot_name: &str, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match slot_name {
            LAMP_SLOT if self.lamp_id.is_none() => self.lamp_id(value),
            ROOM_SLOT if self.room_id.is_none() => self.room_id(value),
            _ => self,
        }
    }

    /// Consume the builder, validate, and return an [`Intent`].
    ///
    /// # Errors
    ///
    /// Returns [`HassLightsError::Validation`] if the name or site id is
    /// missing or empty.
    pub fn build(self) -> Result<Intent, HassLightsError> {
        let intent = Intent {
            name: self.name.unwrap_or_default(),
            site_id: self.site_id.unwrap_or_default(),
            lamp_id: self.lamp_id,
            room_id: self.room_id,
        };
        intent.validate()?;
        Ok(intent)
    }
}

/// Turn a spoken identifier into an entity-id fragment: lowercase, then
/// spell out German umlauts (`ä`→`ae`, `ü`→`ue`, `ö`→`oe`).
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for ch in lower.chars() {
        match ch {
            'ä' => out.push_str("ae"),
            'ü' => out.push_str("ue"),
            'ö' => out.push_str("oe"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_umlaut_in_room_name() {
        assert_eq!(normalize_identifier("Küche"), "kueche");
    }

    #[test]
    fn should_normalize_umlaut_in_lamp_name() {
        assert_eq!(normalize_identifier("Bär"), "baer");
    }

    #[test]
    fn should_normalize_uppercase_umlauts() {
        assert_eq!(normalize_identifier("ÄÖÜ"), "aeoeue");
    }

    #[test]
    fn should_only_lowercase_plain_ascii() {
        assert_eq!(normalize_identifier("Living_Room"), "living_room");
    }

    #[test]
    fn should_replace_every_occurrence() {
        assert_eq!(normalize_identifier("Büröküche"), "bueroekueche");
    }

    #[test]
    fn should_be_idempotent() {
        for raw in ["Küche", "Bär", "Wohnzimmer", "ÖLLAMPE", ""] {
            let once = normalize_identifier(raw);
            assert_eq!(normalize_identifier(&once), once);
        }
    }

    #[test]
    fn should_build_intent_with_normalized_slots() {
        let intent = Intent::builder()
            .name("s710:turnOnLight")
            .site_id("default")
            .slot(LAMP_SLOT, Some("Stehlampe"))
            .slot(ROOM_SLOT, Some("Küche"))
            .build()
            .unwrap();

        assert_eq!(intent.lamp_id.as_deref(), Some("stehlampe"));
        assert_eq!(intent.room_id.as_deref(), Some("kueche"));
    }

    #[test]
    fn should_keep_first_slot_value() {
        let intent = Intent::builder()
            .name("s710:turnOnLight")
            .site_id("default")
            .slot(ROOM_SLOT, Some("Bad"))
            .slot(ROOM_SLOT, Some("Flur"))
            .build()
            .unwrap();

        assert_eq!(intent.room_id.as_deref(), Some("bad"));
    }

    #[test]
    fn should_ignore_unknown_and_empty_slots() {
        let intent = Intent::builder()
            .name("s710:turnOnLight")
            .site_id("default")
            .slot("brightness", Some("50"))
            .slot(LAMP_SLOT, None)
            .build()
            .unwrap();

        assert!(intent.lamp_id.is_none());
        assert!(intent.room_id.is_none());
    }

    #[test]
    fn should_return_validation_error_when_site_is_missing() {
        let result = Intent::builder().name("s710:turnOnLight").build();
        assert!(matches!(
            result,
            Err(HassLightsError::Validation(ValidationError::EmptySiteId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let err = Intent::builder().site_id("default").build().unwrap_err();
        assert!(matches!(
            err,
            HassLightsError::Validation(ValidationError::EmptyIntentName)
        ));
    }
}
