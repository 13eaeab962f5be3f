//! Launchpad entry point.
//!
//! Initializes tracing, loads configuration from a TOML file (or built-in
//! defaults), builds the router around the message provider and serves it
//! until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchpad::config::{AppConfig, LoggingConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use launchpad::{create_router, http::start_server, AppError, AppState};

/// Launchpad: banner, hello message and health probe over HTTP
#[derive(Parser, Debug)]
#[command(name = "launchpad", version, about)]
struct Args {
    /// Path to configuration file (defaults apply if the default path is absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "launchpad=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // An explicit path must exist; the default path is optional
    let (config, from_file) = match &args.config {
        Some(path) => (AppConfig::load(path)?, true),
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    if from_file {
        tracing::info!(path = %config_path, "Loaded configuration");
    } else {
        tracing::info!(path = %config_path, "No configuration file found, using defaults");
    }

    let addr = config.socket_addr()?;
    let state = AppState::from_config(&config);
    let app = create_router(state);

    start_server(app, addr).await?;

    Ok(())
}
