//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HassLightsError`] at port boundaries.

/// Boxed error produced by an adapter behind a port.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error crossing the domain/application boundary.
#[derive(Debug, thiserror::Error)]
pub enum HassLightsError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The home automation service call could not be performed.
    #[error("service call failed")]
    ServiceCall(#[source] BoxError),

    /// The spoken confirmation could not be published on the bus.
    #[error("dialogue publish failed")]
    Dialogue(#[source] BoxError),
}

/// Invariant violations raised by domain builders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The intent carried no name.
    #[error("intent name must not be empty")]
    EmptyIntentName,

    /// The intent carried no site identifier.
    #[error("site id must not be empty")]
    EmptySiteId,
}
