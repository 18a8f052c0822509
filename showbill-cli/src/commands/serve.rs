//! HTTP server command
//!
//! Loads config, runs migrations, and serves until a shutdown signal.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use showbill_core::AppConfig;
use showbill_server::db::{create_pool, migrations};
use showbill_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = AppConfig::load_or_default(config_path).context("Failed to load config")?;

    let database_url = args.database_url.unwrap_or(config.database.url);
    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}' in config", config.server.bind))?,
    };

    tracing::info!("Starting showbill server on {}", bind_addr);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
