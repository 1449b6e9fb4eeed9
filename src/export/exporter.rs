//! Dashboard export flow
//!
//! Lists dashboards, pulls their definitions through the export endpoint and
//! writes each one as a self-describing, re-importable JSON file. A failed
//! export of one dashboard is logged and skipped; the rest of the batch
//! continues.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::{Result, ToolError};
use crate::export::types::{DashboardList, DashboardSummary, Envelope};
use crate::resolve::pacer::{FixedDelayPacer, Pacer};

const DASHBOARDS_PATH: &str = "/api/v2/dashboards";
const EXPORT_PATH: &str = "/api/dashboard/export";

/// Inter-export delay; dashboard exports are heavier than device searches
const EXPORT_DELAY: Duration = Duration::from_millis(500);

/// Exports dashboard definitions from one instance
pub struct DashboardExporter<P = FixedDelayPacer> {
    client: ApiClient,
    pacer: P,
}

impl DashboardExporter<FixedDelayPacer> {
    /// Create an exporter with the default inter-export pacing
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            pacer: FixedDelayPacer::new(EXPORT_DELAY),
        }
    }
}

impl<P: Pacer> DashboardExporter<P> {
    /// Create an exporter with an explicit pacing policy
    pub fn with_pacer(client: ApiClient, pacer: P) -> Self {
        Self { client, pacer }
    }

    /// List all dashboards known to the instance
    pub async fn list_dashboards(&self) -> Result<Vec<DashboardSummary>> {
        info!("fetching dashboard list");
        let response = self.client.get(DASHBOARDS_PATH).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Api(format!(
                "dashboard list failed: HTTP {} {}",
                status, body
            )));
        }

        let list: DashboardList = response.json().await?;
        info!(total = list.data.len(), "dashboards found");
        Ok(list.data)
    }

    /// Export the named dashboard spaces; returns the raw export payload
    pub async fn export_spaces(&self, names: &[String]) -> Result<Value> {
        let request = Envelope::export_spaces(names.to_vec());
        let response = self.client.post_json(EXPORT_PATH, &request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::Api(format!(
                "dashboard export failed: HTTP {} {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Write an export payload as an import-ready JSON file and return its
    /// path
    pub fn save_dashboard(
        &self,
        payload: Value,
        output_dir: &Path,
        dashboard_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.json", sanitize_name(dashboard_name), timestamp);
        let filepath = output_dir.join(filename);

        let import_ready = Envelope::import_ready(payload, true);
        let file = fs::File::create(&filepath)?;
        serde_json::to_writer_pretty(file, &import_ready)?;

        info!(path = %filepath.display(), "dashboard saved");
        Ok(filepath)
    }

    /// Export every dashboard as its own file, skipping system dashboards
    /// unless `include_system` is set. Returns the written paths.
    pub async fn export_all(
        &self,
        output_dir: &Path,
        include_system: bool,
    ) -> Result<Vec<PathBuf>> {
        let dashboards = self.list_dashboards().await?;
        if dashboards.is_empty() {
            warn!("no dashboards found to export");
            return Ok(Vec::new());
        }

        let names: Vec<String> = dashboards
            .iter()
            .filter(|d| {
                if include_system || d.is_exportable() {
                    true
                } else {
                    info!(name = d.display_name(), "skipping system dashboard");
                    false
                }
            })
            .map(|d| d.display_name().to_string())
            .collect();

        self.export_each(&names, output_dir).await
    }

    /// Export specific dashboards by name
    pub async fn export_named(&self, names: &[String], output_dir: &Path) -> Result<Vec<PathBuf>> {
        self.export_each(names, output_dir).await
    }

    async fn export_each(&self, names: &[String], output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut exported = Vec::new();

        for (index, name) in names.iter().enumerate() {
            info!(name = name.as_str(), "exporting dashboard");

            match self.export_spaces(std::slice::from_ref(name)).await {
                Ok(payload) => {
                    exported.push(self.save_dashboard(payload, output_dir, name)?);
                }
                Err(e) => {
                    // One failed dashboard must not sink the rest
                    warn!(name = name.as_str(), error = %e, "dashboard export failed");
                }
            }

            if index + 1 < names.len() {
                self.pacer.pause().await;
            }
        }

        Ok(exported)
    }
}

/// Make a dashboard name safe to use as a filename
fn sanitize_name(name: &str) -> String {
    name.replace([' ', '/', '\\'], "_")
}
