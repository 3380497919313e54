//! Application layer
//!
//! Wires configuration, credentials, the secret store and the HTTP server
//! together at startup.

pub mod startup;

pub use startup::{load_settings, resolve_settings, run, serve};
