//! REST API server for the show tracker.
//!
//! Seeds the in-memory store, wires it into the router and serves
//! until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use show_store_api::{router::Router, server::Server};
use show_store_core::{MemoryStore, StoreConfig};
use tokio::signal;

/// Command-line arguments for the show server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// JSON fixture to seed the store with (built-in shows when omitted)
    #[arg(long)]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let config = StoreConfig {
        fixture_path: args.fixture.clone(),
    };
    let store = MemoryStore::open(&config).context("Failed to seed store")?;

    let router = Router::new(Arc::new(store));
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let server = Server::new(addr, router);

    tracing::info!(
        host = %args.host,
        port = args.port,
        fixture = ?args.fixture,
        "Starting show server"
    );

    tokio::select! {
        result = server.serve() => result.context("Server error")?,
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            tracing::info!("Shutting down server");
        }
    }

    Ok(())
}
