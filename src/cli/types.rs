//! CLI type definitions
//!
//! This module contains the clap structure that defines the host arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::LoadOptions;

#[derive(Parser, Debug)]
#[command(name = "vault-echo")]
#[command(about = "Echo configuration resolved from Azure Key Vault", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing appsettings.yaml and appsettings.{environment}.yaml
    #[arg(long, env = "APP_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Environment name used to pick the per-environment settings file
    #[arg(short, long, env = "APP_ENVIRONMENT", default_value = "Production")]
    pub environment: String,

    /// Address to bind, overrides Server.Host
    #[arg(long, env = "APP_HOST")]
    pub host: Option<String>,

    /// Port to listen on, overrides Server.Port
    #[arg(short, long, env = "APP_PORT")]
    pub port: Option<u16>,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_dir: self.config_dir.clone(),
            environment: self.environment.clone(),
            host: self.host.clone(),
            port: self.port,
        }
    }
}
