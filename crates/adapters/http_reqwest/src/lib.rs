//! # hasslights-adapter-http-reqwest
//!
//! HTTP adapter — performs Home Assistant service calls over its REST API.
//!
//! Every call is a single `POST {base_url}/api/services/<domain>/<service>`
//! with a bearer token and a JSON body. There are no retries; a bounded
//! request timeout keeps a hung server from stalling intent handling.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `hasslights-app` and `hasslights-domain`.

mod client;
mod config;
mod error;

pub use client::HassClient;
pub use config::HassConfig;
pub use error::HassError;
