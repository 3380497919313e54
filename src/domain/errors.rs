//! Domain errors for vault-echo.
//!
//! Every error here is a startup error: once the listener is bound nothing in
//! the service can fail except the transport, which axum handles.

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("KeyVault__BaseUrl is not set")]
    MissingVaultUrl,

    #[error("Invalid Key Vault base URL '{url}': {reason}")]
    InvalidVaultUrl { url: String, reason: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid Key Vault timeout: must be at least one second")]
    InvalidTimeout,

    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Errors raised by the secret store
#[derive(Error, Debug)]
pub enum SecretStoreError {
    /// The vault (or the credential behind it) failed the request
    #[error("Key Vault {operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
        #[source]
        source: azure_core::Error,
    },

    #[error("Secret not found: {0}")]
    NotFound(String),
}

/// Fatal startup errors
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create ambient Azure credential: {0}")]
    Credential(#[source] azure_core::Error),

    #[error("Failed to create Key Vault client: {0}")]
    VaultClient(#[source] azure_core::Error),

    #[error(transparent)]
    SecretStore(#[from] SecretStoreError),

    #[error("Timed out after {0}s loading secrets from Key Vault")]
    Timeout(u64),

    #[error("Settings could not be resolved: {0}")]
    Settings(Box<figment::Error>),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}
