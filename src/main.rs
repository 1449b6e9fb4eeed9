//! axtool - Axonius asset toolkit
//!
//! Bulk hostname resolution and dashboard export against an Axonius
//! instance.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use axtool::cli::{Cli, run};

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a .env during development
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
