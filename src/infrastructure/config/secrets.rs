//! Secrets as a configuration source
//!
//! A secret named `Database--Password` lands at `Database.Password`; with a
//! prefix `Svc`, only `Svc-...` secrets are loaded and the prefix is dropped.
//! Vault names are case-insensitive, so both the prefix and the key match
//! without regard to case.

use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};
use tracing::{debug, info};

use crate::domain::errors::SecretStoreError;
use super::keys::insert_string;
use crate::domain::ports::SecretStore;

/// Separator used in secret names where configuration keys nest
pub const KEY_DELIMITER: &str = "--";

/// Decides which secrets load and under which configuration key
#[derive(Debug, Clone, Default)]
pub struct SecretNameMapper {
    prefix: Option<String>,
}

impl SecretNameMapper {
    pub fn new(prefix: Option<String>) -> Self {
        let prefix = prefix
            .map(|p| p.trim().trim_end_matches('-').to_string())
            .filter(|p| !p.is_empty());
        Self { prefix }
    }

    /// Dotted configuration path for a secret, or `None` if the secret is
    /// filtered out by the prefix
    pub fn config_key(&self, secret_name: &str) -> Option<String> {
        let name = match &self.prefix {
            Some(prefix) => {
                let head = secret_name.get(..prefix.len())?;
                if !head.eq_ignore_ascii_case(prefix) {
                    return None;
                }
                secret_name[prefix.len()..].strip_prefix('-')?
            }
            None => secret_name,
        };
        if name.is_empty() {
            return None;
        }
        Some(name.replace(KEY_DELIMITER, "."))
    }
}

/// Secret values fetched at startup, exposed as a figment provider
#[derive(Clone, Default)]
pub struct SecretSource {
    dict: Dict,
    count: usize,
}

impl SecretSource {
    /// Build from `(configuration path, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut source = Self::default();
        for (key, value) in pairs {
            source.insert(key.as_ref(), value.into());
        }
        source
    }

    /// List every enabled secret in the store and read its value
    pub async fn fetch(
        store: &dyn SecretStore,
        mapper: &SecretNameMapper,
    ) -> Result<Self, SecretStoreError> {
        let items = store.list_secrets().await?;
        let mut source = Self::default();
        let mut skipped = 0_usize;

        for item in items {
            if !item.enabled {
                debug!(secret = %item.name, "skipping disabled secret");
                skipped += 1;
                continue;
            }
            let Some(key) = mapper.config_key(&item.name) else {
                debug!(secret = %item.name, "skipping secret outside prefix");
                skipped += 1;
                continue;
            };

            let value = store.get_secret(&item.name).await?;
            debug!(secret = %item.name, key = %key, "loaded secret");
            source.insert(&key, value);
        }

        info!(loaded = source.len(), skipped, "secrets merged into configuration");
        Ok(source)
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn insert(&mut self, key: &str, value: String) {
        if insert_string(&mut self.dict, key, value) {
            self.count += 1;
        }
    }
}

impl std::fmt::Debug for SecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSource")
            .field("keys", &self.dict.keys().collect::<Vec<_>>())
            .field("count", &self.count)
            .finish()
    }
}

impl Provider for SecretSource {
    fn metadata(&self) -> Metadata {
        Metadata::named("Key Vault secrets")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Profile::Default.collect(self.dict.clone()))
    }
}
