//! SiteBlocks Web Server Binary
//!
//! This binary starts the SiteBlocks web server that provides a REST API
//! for resolved colors, grid layouts and rendered pages.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from config.toml (default 127.0.0.1:3001)
//! siteblocks-web --content ./content
//!
//! # Override port and host
//! siteblocks-web --port 8080 --host 0.0.0.0 --content ./content
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siteblocks::config::Config;
use siteblocks::constants::CONTENT_DIR_ENV;
use siteblocks::web;

/// SiteBlocks Web Server - REST API for colors, layouts and pages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to server.port from config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to server.host from config)
    #[arg(long)]
    host: Option<String>,

    /// Content directory with design-system.json and pages/.
    /// Falls back to SITEBLOCKS_CONTENT_DIR, then paths.content_dir,
    /// then `content/` under the config directory.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Gets the default content directory, creating it if it doesn't exist.
fn get_default_content_dir() -> anyhow::Result<PathBuf> {
    let content_dir = Config::config_dir()?.join("content");

    if !content_dir.exists() {
        std::fs::create_dir_all(&content_dir).context(format!(
            "Failed to create content directory: {}",
            content_dir.display()
        ))?;
    }

    Ok(content_dir)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let content_root = match args
        .content
        .or_else(|| std::env::var_os(CONTENT_DIR_ENV).map(PathBuf::from))
        .or_else(|| config.paths.content_dir.clone())
    {
        Some(path) => path,
        None => get_default_content_dir()?,
    };

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context(format!("Invalid bind address {host}:{port}"))?;

    web::run_server(config, content_root, addr).await
}
