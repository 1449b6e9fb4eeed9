//! Asset resolution against the device search endpoint
//!
//! One search POST per hostname, no retries, no follow-up calls. Every
//! failure mode is folded into a [`ResolutionOutcome`] at this boundary so
//! the batch runner never has to handle errors to keep a run alive.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::resolve::outcome::ResolutionOutcome;
use crate::resolve::query::HostQuery;

/// Device search endpoint path
const DEVICES_PATH: &str = "/api/v2/assets/devices";

/// Identifier field exposed by each asset element
const ASSET_ID_FIELD: &str = "internal_axon_id";

/// Seam for resolving one hostname query; lets tests script outcomes
/// without a network.
#[async_trait]
pub trait ResolveHost: Send + Sync {
    /// Resolve a single hostname query to an outcome
    async fn resolve(&self, query: &HostQuery) -> ResolutionOutcome;
}

#[async_trait]
impl<'a, T: ResolveHost> ResolveHost for &'a T {
    async fn resolve(&self, query: &HostQuery) -> ResolutionOutcome {
        ResolveHost::resolve(*self, query).await
    }
}

#[derive(Serialize)]
struct DeviceSearchRequest<'a> {
    include_metadata: bool,
    page: Page,
    use_cache_entry: bool,
    include_details: bool,
    query: &'a str,
}

#[derive(Serialize)]
struct Page {
    limit: u32,
}

/// Resolves hostnames via the device search endpoint
#[derive(Debug, Clone)]
pub struct AssetResolver {
    client: ApiClient,
    page_limit: u32,
}

impl AssetResolver {
    /// Create a resolver over an authenticated client
    pub fn new(client: ApiClient, page_limit: u32) -> Self {
        Self { client, page_limit }
    }

    fn request_body<'a>(&self, query: &'a HostQuery) -> DeviceSearchRequest<'a> {
        DeviceSearchRequest {
            include_metadata: true,
            page: Page {
                limit: self.page_limit,
            },
            use_cache_entry: true,
            include_details: true,
            query: query.expression(),
        }
    }
}

#[async_trait]
impl ResolveHost for AssetResolver {
    async fn resolve(&self, query: &HostQuery) -> ResolutionOutcome {
        debug!(hostname = query.hostname(), "searching for asset");

        let response = match self
            .client
            .post_json(DEVICES_PATH, &self.request_body(query))
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(hostname = query.hostname(), "device search timed out");
                return ResolutionOutcome::Timeout;
            }
            Err(e) => {
                warn!(hostname = query.hostname(), error = %e, "device search failed");
                return ResolutionOutcome::Transport(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                hostname = query.hostname(),
                %status,
                body = body.as_str(),
                "device search rejected"
            );
            return ResolutionOutcome::Transport(format!("HTTP {}", status));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                warn!(hostname = query.hostname(), "device search timed out");
                return ResolutionOutcome::Timeout;
            }
            Err(e) => {
                warn!(hostname = query.hostname(), error = %e, "response body unreadable");
                return ResolutionOutcome::Transport(e.to_string());
            }
        };

        classify_body(&body)
    }
}

/// Pull the first asset identifier out of a well-formed search response.
///
/// Matches are taken in the order the endpoint returns them; no secondary
/// ordering is applied, so which of several matching assets wins is up to
/// the endpoint. Newer endpoint versions return the array under `data`
/// instead of `assets`.
fn classify_body(body: &Value) -> ResolutionOutcome {
    let assets = body
        .get("assets")
        .or_else(|| body.get("data"))
        .and_then(Value::as_array);

    let Some(assets) = assets else {
        return ResolutionOutcome::MalformedResponse(
            "response has no assets or data array".to_string(),
        );
    };

    let Some(first) = assets.first() else {
        return ResolutionOutcome::NotFound;
    };

    let id = first
        .get(ASSET_ID_FIELD)
        .or_else(|| first.get("attributes").and_then(|a| a.get(ASSET_ID_FIELD)))
        .and_then(Value::as_str);

    match id {
        Some(id) => ResolutionOutcome::Found(id.to_string()),
        None => ResolutionOutcome::MalformedResponse(format!(
            "first asset lacks the {} field",
            ASSET_ID_FIELD
        )),
    }
}
