//! amicoin meme arena server
//!
//! Serves meme creation, random head-to-head pairs, voting and the
//! leaderboard over HTTP.

use amicoin_server::{api, ServerConfig, ServiceContainer};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "amicoin-server")]
#[command(about = "Meme head-to-head voting service")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "amicoin.toml")]
    config: PathBuf,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Dry run mode (validate config and exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Defaults, then the config file if present, then AMICOIN__* variables
    let config_file_found = cli.config.exists();
    let mut config = ServerConfig::load(Some(cli.config.as_path()))?;

    if let Some(log_level) = cli.log_level {
        config.monitoring.log_level = log_level;
    }

    init_logging(&config);

    if !config_file_found {
        info!("Config file {} not found, using defaults and environment", cli.config.display());
    }

    info!("Starting amicoin server");
    info!("Storage backend: {:?}", config.storage.backend);
    info!("Minter mode: {:?}", config.minter.mode);
    info!("Vote policy: {:?}", config.voting.policy);

    config.validate()?;
    info!("Configuration validated successfully");

    if cli.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        return Ok(());
    }

    let api_config = config.api.clone();
    let container = ServiceContainer::new(config).await?;
    container.health_check().await?;

    api::start_server(container.api_state(), &api_config).await?;

    info!("Shutting down amicoin server");
    Ok(())
}

fn init_logging(config: &ServerConfig) {
    let log_level = config
        .monitoring
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("amicoin_server={},tower_http=info", log_level).into());

    if config.monitoring.structured_logging {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
