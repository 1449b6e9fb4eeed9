//! Dashboard inventory file
//!
//! `dashboard_inventory.json` lists everything the instance knows about,
//! exportable or not, so an export directory documents its own provenance.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::export::types::DashboardSummary;

const INVENTORY_FILE: &str = "dashboard_inventory.json";

/// Inventory of all dashboards on an instance at export time
#[derive(Debug, Serialize)]
pub struct Inventory {
    pub export_metadata: ExportMetadata,
    pub dashboards: Vec<InventoryEntry>,
}

/// Provenance of the inventory
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    pub exported_at: String,
    pub axonius_url: String,
    pub total_dashboards: usize,
}

/// One dashboard in the inventory
#[derive(Debug, Serialize)]
pub struct InventoryEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_system: bool,
    pub created_date: Option<String>,
    pub modified_date: Option<String>,
    pub can_export: bool,
}

impl Inventory {
    /// Build an inventory from the listed dashboards
    pub fn build(base_url: &str, dashboards: &[DashboardSummary]) -> Self {
        let entries = dashboards
            .iter()
            .map(|d| InventoryEntry {
                id: d.id.clone(),
                name: d.name.clone(),
                description: d.description.clone().unwrap_or_default(),
                kind: d.kind.clone().unwrap_or_else(|| "custom".to_string()),
                is_system: d.is_system,
                created_date: d.created_date.clone(),
                modified_date: d.modified_date.clone(),
                can_export: d.is_exportable(),
            })
            .collect();

        Self {
            export_metadata: ExportMetadata {
                exported_at: chrono::Local::now().to_rfc3339(),
                axonius_url: base_url.to_string(),
                total_dashboards: dashboards.len(),
            },
            dashboards: entries,
        }
    }

    /// Write the inventory into the export directory
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let filepath = output_dir.join(INVENTORY_FILE);
        let file = fs::File::create(&filepath)?;
        serde_json::to_writer_pretty(file, self)?;
        info!(path = %filepath.display(), "dashboard inventory saved");
        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dashboard(name: &str, is_system: bool) -> DashboardSummary {
        serde_json::from_value(json!({
            "id": name, "name": name, "is_system": is_system
        }))
        .unwrap()
    }

    #[test]
    fn inventory_counts_and_flags_dashboards() {
        let dashboards = vec![
            dashboard("Fleet Overview", false),
            dashboard("My Dashboard", true),
        ];
        let inventory = Inventory::build("https://ax.example.com", &dashboards);

        assert_eq!(inventory.export_metadata.total_dashboards, 2);
        assert_eq!(
            inventory.export_metadata.axonius_url,
            "https://ax.example.com"
        );
        assert!(inventory.dashboards[0].can_export);
        assert!(!inventory.dashboards[1].can_export);
    }

    #[test]
    fn inventory_writes_to_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = Inventory::build("https://ax.example.com", &[]);
        let path = inventory.write(dir.path()).unwrap();

        assert!(path.ends_with("dashboard_inventory.json"));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written["export_metadata"]["total_dashboards"], json!(0));
    }
}
