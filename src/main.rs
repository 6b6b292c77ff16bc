//! txsearch main entry point

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;
use txsearch_config::{Config, ConfigError};
use txsearch_core::SearchService;
use txsearch_dataset::{JsonDatasetReader, ReaderRef};

#[derive(Parser, Debug)]
#[command(name = "txsearch")]
#[command(version = "0.1.0")]
#[command(about = "Cached search over a fixed transaction dataset", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let rt = Runtime::new()?;
    rt.block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let (config, missing_config) = match Config::load(&args.config).await {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => {
            for suggestion in e.suggestions() {
                eprintln!("  - {}", suggestion);
            }
            return Err(e).with_context(|| format!("failed to load {}", args.config.display()));
        }
    };

    let env = env_logger::Env::default().default_filter_or(&config.logging.level);
    env_logger::Builder::from_env(env).init();

    if missing_config {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }
    log::info!(
        "Config loaded: dataset={}, cache={} entries / {}s",
        config.dataset_path().display(),
        config.cache.max_entries,
        config.cache.ttl_secs
    );

    let reader: ReaderRef = Arc::new(JsonDatasetReader);
    let service = Arc::new(RwLock::new(SearchService::new(&config, reader)));

    // Requests get 503 until the dataset is installed
    let listener = txsearch_api::bind(&config)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    let server = tokio::spawn(txsearch_api::start_server(
        listener,
        config.clone(),
        Arc::clone(&service),
    ));

    log::info!("Loading dataset from {}", config.dataset_path().display());
    let loaded = service.read().await.read_dataset().await;
    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load dataset ({}): {}", e.severity(), e.to_details());
            server.abort();
            return Err(e).context("dataset load failed");
        }
    };

    let count = service.write().await.install(dataset)?;
    log::info!("Service ready with {} transactions", count);

    server.await??;
    Ok(())
}
