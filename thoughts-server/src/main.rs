//! Thoughts API server entry point

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use thoughts_server::db;
use thoughts_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "thoughts-server",
    version,
    about = "HTTP API for short text posts with like counters"
)]
struct Args {
    /// Address to bind to (default: 0.0.0.0:8080)
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let args = Args::parse();

    let pool = db::create_pool(&args.database_url).context("Failed to create database pool")?;

    // Reported but not fatal; requests return 500 until the database is back
    if let Err(err) = db::migrations::run(&pool).await {
        tracing::error!("Database unavailable at startup: {}", err);
    }

    tracing::info!("Starting thoughts server on {}", args.bind);

    let config = ServerConfig { bind_addr: args.bind };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
