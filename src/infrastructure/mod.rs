//! Infrastructure layer module
//!
//! Adapters for everything outside the process:
//! - Configuration management (figment)
//! - Key Vault secret store (Azure SDK)
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod key_vault;
pub mod logging;
