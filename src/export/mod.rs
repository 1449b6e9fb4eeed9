//! Dashboard export and import packaging
//!
//! Independent of the resolution pipeline; talks to the dashboard endpoints
//! with the JSON:API media type and writes import-ready files, an inventory
//! and an import guide.

pub mod exporter;
pub mod instructions;
pub mod inventory;
pub mod types;

pub use exporter::DashboardExporter;
pub use inventory::Inventory;
pub use types::{DashboardSummary, Envelope};
