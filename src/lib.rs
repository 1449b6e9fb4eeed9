//! # axtool
//!
//! Toolkit for the Axonius asset-management REST API. Two jobs:
//!
//! - **Bulk hostname resolution**: read a CSV of candidate devices, search
//!   each hostname against the device endpoint and write the same table back
//!   with a `URL` column holding the canonical device URL or a fixed error
//!   label. One row in, one row out, always.
//! - **Dashboard portability**: export dashboard definitions into
//!   self-describing, re-importable JSON files with an inventory and a
//!   human-readable import guide.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use axtool::client::ApiClient;
//! use axtool::config::ApiConfig;
//! use axtool::resolve::{AssetResolver, BatchRunner, FixedDelayPacer, read_devices};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("https://ax.example.com", "key", "secret");
//!     let client = ApiClient::new(&config)?;
//!
//!     let devices = read_devices(Path::new("devices.csv"))?;
//!     let runner = BatchRunner::new(
//!         AssetResolver::new(client, config.page_limit),
//!         FixedDelayPacer::default(),
//!         config.base_url(),
//!     );
//!     let table = runner.run(devices).await;
//!     println!("{} rows resolved", table.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod resolve;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{Result, ToolError};
pub use resolve::{BatchRunner, ResolutionOutcome};
