//! Device records and the batch result table
//!
//! Input rows arrive from CSV with at least `IP`, `DNS` and `TYPE` columns;
//! each gains a `URL` value (device URL or error label) exactly once during
//! a run. Output preserves input order and always has one row per input
//! row. Read and write failures here are the only batch-fatal errors in the
//! resolution flow.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Hostname column consumed by the resolver
pub const COL_DNS: &str = "DNS";

/// Fixed output columns, in order
pub const OUTPUT_COLUMNS: [&str; 4] = ["IP", "DNS", "TYPE", "URL"];

/// One input row: a column-name to value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceRecord {
    fields: HashMap<String, String>,
}

impl DeviceRecord {
    /// Build a record from column values
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a column value
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The hostname column, if the row has one
    pub fn hostname(&self) -> Option<&str> {
        self.field(COL_DNS)
    }

    /// Record the resolution outcome cell. Called exactly once per run.
    pub fn set_url(&mut self, value: String) {
        self.fields.insert("URL".to_string(), value);
    }
}

/// Ordered batch output; one row per input row, input order preserved
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    records: Vec<DeviceRecord>,
}

impl ResultTable {
    /// Create an empty table with room for a known batch size
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a completed record
    pub fn push(&mut self, record: DeviceRecord) {
        self.records.push(record);
    }

    /// The accumulated rows, in input order
    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read device records from a headed CSV file
pub fn read_devices(path: &Path) -> Result<Vec<DeviceRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut devices = Vec::new();
    for row in reader.deserialize::<HashMap<String, String>>() {
        devices.push(DeviceRecord::from_fields(row?));
    }
    Ok(devices)
}

/// Write the result table with the four canonical columns
pub fn write_results(path: &Path, table: &ResultTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in table.records() {
        writer.write_record(
            OUTPUT_COLUMNS
                .iter()
                .map(|column| record.field(column).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}
