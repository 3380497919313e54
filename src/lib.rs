//! vault-echo - Key Vault backed configuration echo service
//!
//! Loads configuration from files and environment variables, merges in every
//! secret from an Azure Key Vault using the host's managed identity, and
//! serves the result as JSON on `GET /api/echo`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Settings model, errors, and the secret store
//!   port
//! - **Application Layer** (`application`): Startup composition
//! - **Infrastructure Layer** (`infrastructure`): figment configuration,
//!   the Azure SDK secret store, logging
//! - **Adapters** (`adapters`): HTTP server
//! - **CLI Layer** (`cli`): Host arguments
//!
//! # Example
//!
//! ```ignore
//! use vault_echo::infrastructure::config::{ConfigLoader, LoadOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let base = ConfigLoader::base_figment(&LoadOptions::default());
//!     let host = ConfigLoader::load_host(&base)?;
//!     vault_echo::application::run(base, host).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{ConfigError, SecretStoreError, StartupError};
pub use domain::models::{HostConfig, Settings};
pub use domain::ports::SecretStore;
pub use infrastructure::config::{ConfigLoader, LoadOptions};
