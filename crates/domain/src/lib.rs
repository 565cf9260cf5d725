//! # hasslights-domain
//!
//! Pure domain model for the voice-controlled lights handler.
//!
//! ## Responsibilities
//! - Define **Intents** (a recognized voice command, its site, and the
//!   device/room identifiers extracted from its slots)
//! - Normalize spoken identifiers into Home Assistant entity-id fragments
//! - Resolve an intent into a **Service call** (REST endpoint + payload)
//! - Define the **Confirmation** phrases spoken back to the user
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod confirmation;
pub mod intent;
pub mod service;
