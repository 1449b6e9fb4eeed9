//! Sequential batch execution
//!
//! Drives query building, resolution and pacing across an ordered batch of
//! device records. One device at a time, strictly in input order; a failed
//! row gets its error label and the run moves on, so the output table always
//! covers every input row.

use tracing::{info, warn};

use crate::resolve::outcome::ResolutionOutcome;
use crate::resolve::pacer::Pacer;
use crate::resolve::query::HostQuery;
use crate::resolve::resolver::ResolveHost;
use crate::resolve::table::{DeviceRecord, ResultTable};

/// Runs a batch of device resolutions against one instance
pub struct BatchRunner<R, P> {
    resolver: R,
    pacer: P,
    base_url: String,
}

impl<R: ResolveHost, P: Pacer> BatchRunner<R, P> {
    /// Create a runner; `base_url` anchors the device URLs in the output
    pub fn new(resolver: R, pacer: P, base_url: impl Into<String>) -> Self {
        Self {
            resolver,
            pacer,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Process every record in input order and return the complete table.
    ///
    /// Never fails: per-device errors become labels in the `URL` column.
    pub async fn run(&self, devices: Vec<DeviceRecord>) -> ResultTable {
        let total = devices.len();
        let mut table = ResultTable::with_capacity(total);
        info!(total, "processing devices");

        for (index, mut device) in devices.into_iter().enumerate() {
            let row = index + 1;
            let outcome = self.resolve_record(row, &device).await;

            // Short-circuited rows never hit the network, so they need no
            // pacing either
            let called_network = !matches!(
                outcome,
                ResolutionOutcome::EmptyHostname | ResolutionOutcome::MissingColumn
            );

            let cell = outcome.into_url_cell(&self.base_url);
            info!(row, total, result = cell.as_str(), "row complete");
            device.set_url(cell);
            table.push(device);

            if called_network && row < total {
                self.pacer.pause().await;
            }
        }

        table
    }

    async fn resolve_record(&self, row: usize, device: &DeviceRecord) -> ResolutionOutcome {
        let Some(hostname) = device.hostname() else {
            warn!(row, "no DNS column in row");
            return ResolutionOutcome::MissingColumn;
        };

        match HostQuery::new(hostname) {
            Ok(query) => {
                info!(row, hostname = query.hostname(), "resolving");
                self.resolver.resolve(&query).await
            }
            Err(_) => {
                warn!(row, "empty hostname in row");
                ResolutionOutcome::EmptyHostname
            }
        }
    }
}
