//! Azure Key Vault secret store
//!
//! Adapts the Azure SDK `SecretClient` to the `SecretStore` port.

pub mod store;

pub use store::KeyVaultSecretStore;
