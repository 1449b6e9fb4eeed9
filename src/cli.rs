//! Command-line surface
//!
//! Two subcommands: `resolve` runs the batch hostname-resolution pipeline
//! over a CSV; `export` packages dashboards into import-ready files.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::{Result, ToolError};
use crate::export::instructions::write_instructions;
use crate::export::{DashboardExporter, Inventory};
use crate::resolve::{
    AssetResolver, BatchRunner, FixedDelayPacer, read_devices, write_results,
};

/// Axonius asset toolkit
#[derive(Debug, Parser)]
#[command(name = "axtool", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Instance connection and credentials
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Axonius instance URL
    #[arg(short = 'a', long = "url", env = "AXONIUS_URL")]
    pub url: String,

    /// API key credential
    #[arg(short = 'k', long, env = "AXONIUS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API secret credential
    #[arg(short = 's', long, env = "AXONIUS_API_SECRET", hide_env_values = true)]
    pub api_secret: String,
}

impl ConnectionArgs {
    /// Build and validate the API configuration
    pub fn to_config(&self) -> Result<ApiConfig> {
        let config = ApiConfig::new(&self.url, &self.api_key, &self.api_secret);
        config.validate().map_err(ToolError::Config)?;
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve hostnames from a CSV to device URLs
    Resolve {
        /// Input CSV with IP, DNS, TYPE columns
        #[arg(short, long)]
        file: PathBuf,

        /// Output CSV with results
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,

        /// Delay between API calls in milliseconds
        #[arg(long, default_value_t = 100)]
        delay_ms: u64,
    },

    /// Export dashboards as import-ready JSON files
    Export {
        /// Export all available dashboards
        #[arg(long, conflicts_with = "dashboards")]
        all: bool,

        /// Specific dashboard names to export
        #[arg(long, num_args = 1..)]
        dashboards: Vec<String>,

        /// Include system dashboards in the export
        #[arg(long)]
        include_system: bool,

        /// Only write the dashboard inventory, export nothing
        #[arg(long)]
        inventory_only: bool,

        /// Output directory for exported files
        #[arg(short, long, default_value = "./axonius_dashboards")]
        output_dir: PathBuf,
    },
}

/// Execute the parsed command
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.connection.to_config()?;

    match cli.command {
        Command::Resolve {
            file,
            output,
            delay_ms,
        } => run_resolve(config, &file, &output, delay_ms).await,
        Command::Export {
            all,
            dashboards,
            include_system,
            inventory_only,
            output_dir,
        } => {
            run_export(
                config,
                all,
                dashboards,
                include_system,
                inventory_only,
                &output_dir,
            )
            .await
        }
    }
}

async fn run_resolve(
    config: ApiConfig,
    file: &Path,
    output: &Path,
    delay_ms: u64,
) -> Result<()> {
    let devices = read_devices(file)?;
    if devices.is_empty() {
        warn!("no devices found in CSV file");
        return Ok(());
    }

    let client = ApiClient::new(&config)?;
    let resolver = AssetResolver::new(client, config.page_limit);
    let pacer = FixedDelayPacer::new(Duration::from_millis(delay_ms));
    let runner = BatchRunner::new(resolver, pacer, config.base_url());

    let table = runner.run(devices).await;

    write_results(output, &table)?;
    info!(rows = table.len(), path = %output.display(), "results written");
    Ok(())
}

async fn run_export(
    config: ApiConfig,
    all: bool,
    dashboards: Vec<String>,
    include_system: bool,
    inventory_only: bool,
    output_dir: &Path,
) -> Result<()> {
    let client = ApiClient::json_api(&config)?;
    let exporter = DashboardExporter::new(client);

    let listed = exporter.list_dashboards().await?;
    Inventory::build(config.base_url(), &listed).write(output_dir)?;

    if inventory_only {
        info!("inventory-only mode, done");
        return Ok(());
    }

    let exported = if all {
        exporter.export_all(output_dir, include_system).await?
    } else if !dashboards.is_empty() {
        exporter.export_named(&dashboards, output_dir).await?
    } else {
        return Err(ToolError::Config(
            "specify --all or --dashboards <names>".to_string(),
        ));
    };

    if exported.is_empty() {
        warn!("no dashboards were exported");
        return Ok(());
    }

    write_instructions(output_dir, config.base_url(), &exported)?;
    info!(
        exported = exported.len(),
        dir = %output_dir.display(),
        "export complete"
    );
    Ok(())
}
