use azure_core::Url;
use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use std::path::PathBuf;

use super::env::EnvSource;
use super::keys::CaseInsensitive;
use super::secrets::SecretSource;
use crate::domain::errors::{ConfigError, StartupError};
use crate::domain::models::{HostConfig, KeyVaultConfig, Settings};
use crate::infrastructure::logging::parse_log_level;

/// Where and how to look for configuration
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory holding `appsettings.yaml` and `appsettings.{env}.yaml`
    pub config_dir: PathBuf,

    /// Environment name, e.g. `Production` or `Development`
    pub environment: String,

    /// Command-line override for `Server.Host`
    pub host: Option<String>,

    /// Command-line override for `Server.Port`
    pub port: Option<u16>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("."),
            environment: "Production".to_string(),
            host: None,
            port: None,
        }
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the base configuration, before any secret is fetched
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `appsettings.yaml`
    /// 3. `appsettings.{environment}.yaml`
    /// 4. Environment variables, `__` nesting (`KeyVault__BaseUrl`)
    /// 5. Command-line overrides
    ///
    /// Keys from files and the environment match case-insensitively.
    pub fn base_figment(options: &LoadOptions) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(HostConfig::default()))
            .merge(CaseInsensitive(Yaml::file(
                options.config_dir.join("appsettings.yaml"),
            )))
            .merge(CaseInsensitive(Yaml::file(
                options
                    .config_dir
                    .join(format!("appsettings.{}.yaml", options.environment)),
            )))
            .merge(EnvSource::from_env());

        if let Some(host) = &options.host {
            figment = figment.merge(Serialized::default("Server.Host", host));
        }
        if let Some(port) = options.port {
            figment = figment.merge(Serialized::default("Server.Port", port));
        }

        figment
    }

    /// Extract and validate the host configuration
    pub fn load_host(figment: &Figment) -> Result<HostConfig, ConfigError> {
        let config: HostConfig = figment.extract()?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &HostConfig) -> Result<(), ConfigError> {
        Self::vault_url(&config.key_vault)?;

        parse_log_level(&config.logging.level)?;

        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if config.key_vault.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(())
    }

    /// Parse the vault base address
    ///
    /// Absent or blank is reported as missing; anything that is not an
    /// absolute http(s) URL with a host is invalid.
    pub fn vault_url(config: &KeyVaultConfig) -> Result<Url, ConfigError> {
        let raw = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVaultUrl)?;

        let invalid = |reason: String| ConfigError::InvalidVaultUrl {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "https" | "http") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(url)
    }

    /// Merge the fetched secrets over the base configuration and extract
    /// the settings
    ///
    /// Secrets are merged last, so they win over every other source.
    pub fn resolve_settings(base: Figment, secrets: SecretSource) -> Result<Settings, StartupError> {
        base.merge(secrets)
            .extract::<Settings>()
            .map_err(|e| StartupError::Settings(Box::new(e)))
    }
}
