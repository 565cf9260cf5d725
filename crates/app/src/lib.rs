//! # hasslights-app
//!
//! Application layer — the intent-routing use-case and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceCaller` — perform a Home Assistant service call
//!   - `DialoguePublisher` — speak a notification on a site
//! - Define the **driving/inbound** use-case:
//!   - `IntentRouter` — resolve an intent, call the service, confirm
//!
//! ## Dependency rule
//! Depends on `hasslights-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
