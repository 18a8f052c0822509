//! showbill CLI - booking-site server for venues, artists, and shows
//!
//! Entry point for the `showbill` binary:
//! - `serve`: run the HTTP server (migrations run at startup)
//! - `migrate`: run schema migrations and exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "showbill",
    author,
    version,
    about = "Booking-site server for venues, artists, and shows"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config file (default: ~/.showbill/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Run schema migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, cli.config.as_deref()).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args, cli.config.as_deref()).await,
    }
}
