//! Schema migration command

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use showbill_core::AppConfig;
use showbill_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run schema migrations and exit
pub async fn run_migrate(args: MigrateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = AppConfig::load_or_default(config_path).context("Failed to load config")?;
    let database_url = args.database_url.unwrap_or(config.database.url);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}
