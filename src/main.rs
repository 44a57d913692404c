//! Blocklist Registry CLI.

use anyhow::Result;
use blocklist_registry::api::{self, AppState};
use blocklist_registry::{Catalog, Config, Fetcher, Ingestor, MemoryStore};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blocklist-registry")]
#[command(about = "Deduplicated registry of malicious IPs built from public blocklist feeds")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: String,

    /// Print example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Validate configuration and exit
    #[arg(long)]
    validate: bool,

    /// Run one ingestion and exit instead of serving the API
    #[arg(long)]
    rebuild: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --print-config
    if args.print_config {
        println!("{}", Config::example());
        return Ok(());
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Handle --validate
    if args.validate {
        info!("Configuration is valid");
        return Ok(());
    }

    // Construct the components; all client handles are owned here and
    // injected, never held as globals.
    let store = Arc::new(MemoryStore::new());
    let catalog = Catalog::new(&config.base_url);
    let fetcher = Fetcher::new(config.timeout(), config.max_body_bytes);
    let ingestor = Arc::new(Ingestor::new(
        catalog,
        fetcher,
        store.clone(),
        config.concurrency,
    ));

    // Handle --rebuild: one-shot ingestion for external schedulers
    if args.rebuild {
        let report = ingestor.run().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let app = api::router(AppState { store, ingestor }).layer(TraceLayer::new_for_http());

    info!(listen = %config.listen, "Starting management API");
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
