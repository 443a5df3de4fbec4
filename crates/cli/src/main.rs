mod render;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pawfinder_core::{AdoptionCatalog, CatalogClient, Config, Session, SessionStore};

use repl::Repl;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("PAWFINDER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing file means defaults
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        pawfinder_core::load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No configuration file at {:?}, using defaults", config_path);
        Config::default()
    };

    info!("Adoption service: {}", config.api.base_url);

    let api: Arc<dyn AdoptionCatalog> = Arc::new(
        CatalogClient::new(&config.api).context("Failed to create catalog client")?,
    );

    let session = Session::load(SessionStore::new(config.session.path.clone()));

    let mut repl = Repl::new(api, session);
    repl.run().await
}
