// Bookstore API - Web Server
// REST API for books and orders, backed by in-memory repositories

use anyhow::Result;
use bookstore_api::config::{DEFAULT_HOST, DEFAULT_PORT};
use bookstore_api::{init_logging, serve, AppState, ServerConfig};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bookstore-server", version, about = "In-memory books & orders REST API")]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Default log filter (RUST_LOG overrides it)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    info!("Bookstore API v{}", bookstore_api::VERSION);

    // Repositories are created once here and shared by every request
    let state = AppState::new();
    let config = ServerConfig::new(args.host, args.port);

    serve(&config, state).await
}
