//! Composition root
//!
//! Startup is strictly linear: resolve settings (token request and vault
//! calls, bounded by `KeyVault.TimeoutSecs`), bind, then serve. Any failure
//! aborts before the listener exists.

use azure_core::auth::TokenCredential;
use figment::Figment;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::adapters::http::EchoHttpServer;
use crate::domain::errors::StartupError;
use crate::domain::models::{HostConfig, Settings};
use crate::domain::ports::SecretStore;
use crate::infrastructure::config::{ConfigLoader, SecretNameMapper, SecretSource};
use crate::infrastructure::key_vault::KeyVaultSecretStore;

/// Fetch secrets from `store` and resolve the settings over `base`
pub async fn load_settings(
    base: Figment,
    store: &dyn SecretStore,
    mapper: &SecretNameMapper,
) -> Result<Settings, StartupError> {
    let secrets = SecretSource::fetch(store, mapper).await?;
    if secrets.is_empty() {
        warn!("no Key Vault secrets matched; settings come from configuration only");
    }
    ConfigLoader::resolve_settings(base, secrets)
}

/// Resolve the settings using the configured vault and the given credential
pub async fn resolve_settings(
    base: Figment,
    host: &HostConfig,
    credential: Arc<dyn TokenCredential>,
) -> Result<Settings, StartupError> {
    let vault_url = ConfigLoader::vault_url(&host.key_vault)?;
    info!(vault = %vault_url, "loading secrets from Key Vault");

    let store = KeyVaultSecretStore::new(&vault_url, credential).map_err(StartupError::VaultClient)?;
    let mapper = SecretNameMapper::new(host.key_vault.prefix.clone());

    let timeout_secs = host.key_vault.timeout_secs;
    tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        load_settings(base, &store, &mapper),
    )
    .await
    .map_err(|_| StartupError::Timeout(timeout_secs))?
}

/// Run the service until a shutdown signal arrives
pub async fn run(base: Figment, host: HostConfig) -> Result<(), StartupError> {
    let credential = azure_identity::create_default_credential().map_err(StartupError::Credential)?;

    let settings = Arc::new(resolve_settings(base, &host, credential).await?);
    info!("settings resolved");
    warn!(
        "GET /api/echo returns every setting, including secret values, without redaction; \
         restrict access at the hosting platform"
    );

    serve(settings, &host, shutdown_signal()).await
}

/// Bind and serve the resolved settings
pub async fn serve<F>(settings: Arc<Settings>, host: &HostConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server = EchoHttpServer::new(settings, host.server.clone());
    let listener = server.bind().await?;
    server.serve_with_shutdown(listener, shutdown).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
