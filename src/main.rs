//! Paydash main entry point

use clap::Parser;
use paydash_api::start_server;
use paydash_client::MemoryBackend;
use paydash_config::{Config, ConfigError};
use paydash_core::Dashboard;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "paydash")]
#[command(author = "Paydash Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight employee transaction dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = Config::load(args.config.clone());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    )
    .init();

    match loaded {
        Ok(_) => log::info!("Config loaded from {}", args.config.display()),
        Err(e @ ConfigError::FileNotFound { .. }) => {
            log::warn!("{}; using default configuration", e)
        }
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        let api = Arc::new(MemoryBackend::seeded(
            config.pagination.transactions_per_page,
            config.backend.latency_ms,
        ));

        let mut dashboard = Dashboard::new(api);
        log::info!("Loading employee directory and first transactions page");
        if let Err(e) = dashboard.mount().await {
            // The server still starts; the page shows the not-loaded state
            log::error!("Initial load failed: {}", e);
        }

        let dashboard = Arc::new(RwLock::new(dashboard));
        start_server(config, dashboard).await;
    });

    Ok(())
}
