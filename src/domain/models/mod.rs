//! Domain models

pub mod config;
pub mod settings;

pub use config::{HostConfig, KeyVaultConfig, LogFormat, LoggingConfig, RotationPolicy, ServerConfig};
pub use settings::Settings;
