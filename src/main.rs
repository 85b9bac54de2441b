//! Diary server
//!
//! Run with: cargo run -- [--config diary.toml] [--port 8000]
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `$CONFIG_DIR/diary/config.toml` and `./diary.toml` that exists), then
//! environment variables, then command-line flags:
//! - `DIARY_DATA_FILE`: CSV file holding the entries (default: diary.csv)
//! - `DIARY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DIARY_PORT`: Port to listen on (default: 8000)
//! - `DIARY_LOG_LEVEL`: Log level (default: info)
//! - `DIARY_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full tracing filter, overrides the log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diary::api::{serve, AppState};
use diary::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use diary::storage::EntryStore;

#[derive(Parser)]
#[command(name = "diary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small journaling web form backed by a CSV file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// CSV file holding the diary entries
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the diary (default)
    Serve,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            warnings: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file;
    }

    init_tracing(&config.logging);
    loaded.log();

    tracing::info!("Starting Diary v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data file: {:?}", config.storage.data_file);

    let store = EntryStore::new(&config.storage.data_file);
    let state = AppState::new(store, &config.api);

    serve(state, &config.api)
        .await
        .context("Diary server failed")?;

    tracing::info!("Diary stopped");
    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("diary={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
