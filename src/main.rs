use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use pokedex::api::{CatalogClient, ClientOptions};
use pokedex::config::Config;
use pokedex::logging::init_tracing;
use pokedex::ui::route::Route;

/// Browse the Pokemon catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about)]
struct Cli {
    /// Config file (default: ~/.config/pokedex/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Override the number of concurrent detail requests
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Start route: '/', '/gallery' or '/pokemon/<id-or-name>'
    #[arg(long, default_value = "/", value_name = "PATH")]
    route: String,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if let Some(concurrency) = self.concurrency {
            config.api.max_concurrent_requests = concurrency;
        }
        config.normalize();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start = Route::from_path(&cli.route)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pokedex-io")
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = CatalogClient::new(ClientOptions::from(&config.api))?;

    pokedex::ui::runtime::run(&config, start, client, runtime.handle().clone())?;

    runtime.shutdown_timeout(Duration::from_millis(250));
    Ok(())
}
