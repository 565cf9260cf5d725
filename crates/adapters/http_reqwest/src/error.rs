//! HTTP adapter error types.

use hasslights_domain::error::HassLightsError;

/// Errors specific to the Home Assistant HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HassError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request did not produce a response (connection, timeout, …).
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl HassError {
    /// Convert into a [`HassLightsError::ServiceCall`] for propagation
    /// across port boundaries.
    #[must_use]
    pub fn into_domain(self) -> HassLightsError {
        HassLightsError::ServiceCall(Box::new(self))
    }
}

impl From<HassError> for HassLightsError {
    fn from(err: HassError) -> Self {
        err.into_domain()
    }
}
