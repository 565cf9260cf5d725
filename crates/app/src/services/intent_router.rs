//! Intent router — turns one voice intent into one service call and one
//! spoken confirmation.

use hasslights_domain::confirmation::{Confirmation, ConfirmationPhrases};
use hasslights_domain::intent::Intent;
use hasslights_domain::service::ServiceCall;

use crate::ports::{DialoguePublisher, ServiceCaller};

/// What happened to a handled intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleOutcome {
    /// The intent or its parameters were not recognized; nothing was called
    /// and nothing was said.
    Ignored,
    /// The service was called and the given confirmation was spoken (or at
    /// least attempted).
    Confirmed(Confirmation),
}

/// Application service routing intents to Home Assistant.
///
/// Handling never fails: call errors become a failure confirmation and
/// publish errors are logged.
pub struct IntentRouter<C, D> {
    caller: C,
    dialogue: D,
    phrases: ConfirmationPhrases,
}

impl<C, D> IntentRouter<C, D>
where
    C: ServiceCaller + Send + Sync,
    D: DialoguePublisher + Send + Sync,
{
    /// Create a new router backed by the given ports.
    pub fn new(caller: C, dialogue: D, phrases: ConfirmationPhrases) -> Self {
        Self {
            caller,
            dialogue,
            phrases,
        }
    }

    /// Handle a single intent end to end.
    pub async fn handle_intent(&self, intent: &Intent) -> HandleOutcome {
        let Some(call) = ServiceCall::for_intent(intent) else {
            tracing::info!(
                intent = %intent.name,
                site_id = %intent.site_id,
                "intent/parameters not recognized, ignoring"
            );
            return HandleOutcome::Ignored;
        };

        tracing::debug!(
            intent = %intent.name,
            service = %call.endpoint,
            entity_id = %call.payload.entity_id,
            "firing service"
        );

        let confirmation = match self.caller.call(&call).await {
            Ok(status) => {
                tracing::debug!(status, service = %call.endpoint, "service answered");
                Confirmation::from_status(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, service = %call.endpoint, "service call failed");
                Confirmation::Failure
            }
        };

        let text = self.phrases.phrase(confirmation);
        if let Err(err) = self
            .dialogue
            .start_notification(&intent.site_id, text)
            .await
        {
            tracing::warn!(error = %err, site_id = %intent.site_id, "failed to publish confirmation");
        }

        HandleOutcome::Confirmed(confirmation)
    }
}
