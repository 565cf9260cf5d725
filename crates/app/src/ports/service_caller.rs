//! Service-call port — executes a resolved call against home automation.

use std::future::Future;

use hasslights_domain::error::HassLightsError;
use hasslights_domain::service::ServiceCall;

/// Executes [`ServiceCall`]s against the home automation backend.
pub trait ServiceCaller {
    /// Perform the call and return the HTTP status of the response.
    ///
    /// A response with any status is `Ok`; `Err` is reserved for calls
    /// that never got an answer (connection refused, timeout, …).
    fn call(&self, call: &ServiceCall) -> impl Future<Output = Result<u16, HassLightsError>> + Send;
}

impl<T: ServiceCaller + Send + Sync> ServiceCaller for std::sync::Arc<T> {
    fn call(
        &self,
        call: &ServiceCall,
    ) -> impl Future<Output = Result<u16, HassLightsError>> + Send {
        (**self).call(call)
    }
}
