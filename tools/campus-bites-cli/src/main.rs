//! Campus Bites from the terminal.
//!
//! Browse the menu, keep a cart between runs and place orders; the `admin`
//! subcommands manage dishes and order status against the same backend.

mod commands;
mod file_store;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use campus_bites_client::config::{ClientConfig, API_URL_ENV};
use campus_bites_client::http::HttpBackend;

use commands::Command;
use file_store::FileStore;

#[derive(Parser)]
#[command(name = "campus-bites", about = "Campus Bites storefront and admin console")]
struct Cli {
    /// Backend base URL (e.g. "http://localhost:5000").
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Directory holding the saved cart (default: platform data dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let store = FileStore::new(cli.data_dir.unwrap_or_else(FileStore::default_dir));
    tracing::debug!(api = config.base_url(), data_dir = %store.dir().display(), "Starting");

    let backend = HttpBackend::new(config);
    commands::run(cli.command, &backend, store).await
}
