//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (`appsettings.yaml`, `appsettings.{env}.yaml`)
//! - Environment variable overrides with `__` nesting, kept as strings
//! - Key Vault secrets merged last
//! - Case-insensitive key matching across every source
//! - Host configuration validation

pub mod env;
pub mod keys;
pub mod loader;
pub mod secrets;

pub use env::EnvSource;
pub use keys::CaseInsensitive;
pub use loader::{ConfigLoader, LoadOptions};
pub use secrets::{SecretNameMapper, SecretSource};
