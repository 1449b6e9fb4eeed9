//! Dashboard API wire types
//!
//! The dashboard endpoints speak a JSON:API-style envelope:
//! `{"meta": null, "data": {"type": ..., "attributes": {...}}}`. Export
//! requests carry space names; saved files wrap the export payload in the
//! matching import envelope so they are directly re-importable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dashboards that ship with the product and cannot be exported
pub const SYSTEM_DASHBOARDS: [&str; 2] = ["My Dashboard", "Axonius Dashboard"];

/// JSON:API-style envelope wrapping a typed attribute payload.
///
/// `meta` is always serialized, even when null; the import endpoint
/// requires the key to be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<A> {
    pub meta: Option<Value>,
    pub data: EnvelopeData<A>,
}

/// Typed `data` member of an [`Envelope`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeData<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

/// Attributes of an `export_spaces_schema` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSpacesAttributes {
    pub spaces: Vec<String>,
}

/// Attributes of an `import_spaces_schema` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSpacesAttributes {
    pub replace: bool,
    pub data: Value,
}

impl Envelope<ExportSpacesAttributes> {
    /// Build an export request for the named dashboard spaces
    pub fn export_spaces(spaces: Vec<String>) -> Self {
        Self {
            meta: None,
            data: EnvelopeData {
                kind: "export_spaces_schema".to_string(),
                attributes: ExportSpacesAttributes { spaces },
            },
        }
    }
}

impl Envelope<ImportSpacesAttributes> {
    /// Wrap an export payload so the file can be imported as-is.
    /// `replace` controls whether an existing dashboard with the same name
    /// is overwritten on import.
    pub fn import_ready(payload: Value, replace: bool) -> Self {
        Self {
            meta: None,
            data: EnvelopeData {
                kind: "import_spaces_schema".to_string(),
                attributes: ImportSpacesAttributes {
                    replace,
                    data: payload,
                },
            },
        }
    }
}

/// One dashboard as listed by `GET /api/v2/dashboards`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
}

impl DashboardSummary {
    /// Name to show and to export under; falls back to the id
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("unknown")
    }

    /// Whether this dashboard can be exported (system dashboards cannot)
    pub fn is_exportable(&self) -> bool {
        !self.is_system
            && self.kind.as_deref() != Some("system")
            && !SYSTEM_DASHBOARDS.contains(&self.display_name())
    }
}

/// Response body of the dashboard list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardList {
    #[serde(default)]
    pub data: Vec<DashboardSummary>,
}
