//! vault-echo entry point.

use anyhow::Context;
use clap::Parser;

use vault_echo::cli::Cli;
use vault_echo::infrastructure::config::ConfigLoader;
use vault_echo::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = ConfigLoader::base_figment(&cli.load_options());
    let host = ConfigLoader::load_host(&base).context("Failed to load host configuration")?;
    let _logger = LoggerImpl::init(&host.logging).context("Failed to initialize logging")?;

    if let Err(err) = vault_echo::application::run(base, host).await {
        tracing::error!(error = %err, "startup failed");
        return Err(err.into());
    }

    Ok(())
}
