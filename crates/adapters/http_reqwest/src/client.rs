//! [`ServiceCaller`] backed by the Home Assistant REST API.

use hasslights_app::ports::ServiceCaller;
use hasslights_domain::error::HassLightsError;
use hasslights_domain::service::ServiceCall;

use crate::config::HassConfig;
use crate::error::HassError;

/// Home Assistant REST client.
#[derive(Debug, Clone)]
pub struct HassClient {
    config: HassConfig,
    http: reqwest::Client,
}

impl HassClient {
    /// Build a client for the given instance.
    ///
    /// # Errors
    ///
    /// Returns [`HassError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: HassConfig) -> Result<Self, HassError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HassError::Build)?;
        Ok(Self { config, http })
    }
}

impl ServiceCaller for HassClient {
    async fn call(&self, call: &ServiceCall) -> Result<u16, HassLightsError> {
        let url = self.config.url_for(call.endpoint.path());
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&call.payload)
            .send()
            .await
            .map_err(|source| HassError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        tracing::debug!(%url, status, entity_id = %call.payload.entity_id, "service call answered");
        Ok(status)
    }
}
