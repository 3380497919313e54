//! Domain layer for vault-echo
//!
//! Configuration models, error types and the ports through which the
//! application reaches the secret store and the ambient identity.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigError, SecretStoreError, StartupError};
