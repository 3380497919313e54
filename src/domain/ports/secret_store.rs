use async_trait::async_trait;

use crate::domain::errors::SecretStoreError;

/// Listing entry for a secret (no value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretItem {
    /// Secret name, e.g. `ApiKey` or `Database--Password`
    pub name: String,

    /// Whether the store reports the secret as enabled
    pub enabled: bool,
}

/// Key-value store holding secret configuration
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// List every secret in the store
    async fn list_secrets(&self) -> Result<Vec<SecretItem>, SecretStoreError>;

    /// Read the current value of a secret
    async fn get_secret(&self, name: &str) -> Result<String, SecretStoreError>;
}
