//! Confirmation — what the assistant says after a service call.

/// HTTP status Home Assistant answers with when a service ran.
pub const SUCCESS_STATUS: u16 = 200;

/// Outcome reported to the user. There are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Success,
    Failure,
}

impl Confirmation {
    /// Map a Home Assistant response status to a confirmation.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if status == SUCCESS_STATUS {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// The phrases spoken for each [`Confirmation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPhrases {
    /// Spoken when the service call succeeded.
    pub success: String,
    /// Spoken for any other outcome.
    pub failure: String,
}

impl Default for ConfirmationPhrases {
    fn default() -> Self {
        Self {
            success: "Bestätige".to_string(),
            failure: "Ausführung nicht möglich".to_string(),
        }
    }
}

impl ConfirmationPhrases {
    /// Phrase to speak for the given outcome.
    #[must_use]
    pub fn phrase(&self, confirmation: Confirmation) -> &str {
        match confirmation {
            Confirmation::Success => &self.success,
            Confirmation::Failure => &self.failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_confirm_success_only_for_200() {
        assert_eq!(Confirmation::from_status(200), Confirmation::Success);
        assert_eq!(Confirmation::from_status(201), Confirmation::Failure);
        assert_eq!(Confirmation::from_status(401), Confirmation::Failure);
        assert_eq!(Confirmation::from_status(500), Confirmation::Failure);
    }

    #[test]
    fn should_have_german_defaults() {
        let phrases = ConfirmationPhrases::default();
        assert_eq!(phrases.phrase(Confirmation::Success), "Bestätige");
        assert_eq!(
            phrases.phrase(Confirmation::Failure),
            "Ausführung nicht möglich"
        );
    }

    #[test]
    fn should_pick_configured_phrase() {
        let phrases = ConfirmationPhrases {
            success: "Okay".to_string(),
            failure: "Sorry".to_string(),
        };
        assert_eq!(phrases.phrase(Confirmation::Success), "Okay");
        assert_eq!(phrases.phrase(Confirmation::Failure), "Sorry");
    }
}
