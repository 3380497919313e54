use async_trait::async_trait;
use azure_core::auth::TokenCredential;
use azure_core::{StatusCode, Url};
use azure_security_keyvault::SecretClient;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::errors::SecretStoreError;
use crate::domain::ports::{SecretItem, SecretStore};
use crate::infrastructure::logging::SecretScrubber;

/// Secret store backed by an Azure Key Vault
///
/// The SDK client owns the wire protocol: authentication through the
/// credential, paging and retries.
#[derive(Debug)]
pub struct KeyVaultSecretStore {
    client: SecretClient,
    scrubber: SecretScrubber,
}

impl KeyVaultSecretStore {
    pub fn new(
        vault_url: &Url,
        credential: Arc<dyn TokenCredential>,
    ) -> azure_core::Result<Self> {
        Ok(Self {
            client: SecretClient::new(vault_url.as_str(), credential)?,
            scrubber: SecretScrubber::new(),
        })
    }

    fn request_error(&self, operation: &'static str, source: azure_core::Error) -> SecretStoreError {
        SecretStoreError::Request {
            operation,
            message: self.scrubber.scrub_message(&source.to_string()),
            source,
        }
    }
}

#[async_trait]
impl SecretStore for KeyVaultSecretStore {
    #[instrument(skip(self))]
    async fn list_secrets(&self) -> Result<Vec<SecretItem>, SecretStoreError> {
        let mut pages = self.client.list_secrets().into_stream();
        let mut items = Vec::new();
        let mut page_count = 0_usize;

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| self.request_error("list secrets", e))?;
            page_count += 1;

            for secret in page.value {
                match secret_name(&secret.id) {
                    Some(name) => items.push(SecretItem {
                        name: name.to_string(),
                        enabled: secret.attributes.enabled,
                    }),
                    None => debug!(id = %secret.id, "skipping secret with unrecognised identifier"),
                }
            }
        }

        info!(secrets = items.len(), pages = page_count, "listed Key Vault secrets");
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get_secret(&self, name: &str) -> Result<String, SecretStoreError> {
        match self.client.get(name).await {
            Ok(secret) => Ok(secret.value),
            Err(err) => {
                let not_found = err
                    .as_http_error()
                    .is_some_and(|http_err| matches!(http_err.status(), StatusCode::NotFound));
                if not_found {
                    Err(SecretStoreError::NotFound(name.to_string()))
                } else {
                    Err(self.request_error("get secret", err))
                }
            }
        }
    }
}

/// Secret name from an identifier like `https://{vault}/secrets/{name}[/{version}]`
fn secret_name(id: &str) -> Option<&str> {
    let (_, rest) = id.split_once("/secrets/")?;
    rest.split('/').next().filter(|name| !name.is_empty())
}
