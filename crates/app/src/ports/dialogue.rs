//! Dialogue port — speaks text back to the user.

use std::future::Future;

use hasslights_domain::error::HassLightsError;

/// Starts dialogue sessions on the voice assistant.
pub trait DialoguePublisher {
    /// Start a notification session on `site_id` that speaks `text` and
    /// ends without waiting for an answer.
    fn start_notification(
        &self,
        site_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), HassLightsError>> + Send;
}

impl<T: DialoguePublisher + Send + Sync> DialoguePublisher for std::sync::Arc<T> {
    fn start_notification(
        &self,
        site_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), HassLightsError>> + Send {
        (**self).start_notification(site_id, text)
    }
}
