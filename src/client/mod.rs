//! Authenticated HTTP session for the Axonius API
//!
//! Wraps a [`reqwest::Client`] carrying the two static header credentials and
//! the media-type negotiation, so callers only deal with endpoint paths and
//! JSON bodies. Device search speaks plain JSON; the dashboard endpoints
//! speak `application/vnd.api+json`.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{Result, ToolError};

/// JSON media type used by the device search endpoint
pub const MEDIA_JSON: &str = "application/json";

/// JSON:API media type used by the dashboard endpoints
pub const MEDIA_JSON_API: &str = "application/vnd.api+json";

/// Pre-configured HTTP client for one Axonius instance
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client negotiating plain JSON (device search)
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_media_type(config, MEDIA_JSON)
    }

    /// Create a client negotiating JSON:API (dashboard endpoints)
    pub fn json_api(config: &ApiConfig) -> Result<Self> {
        Self::with_media_type(config, MEDIA_JSON_API)
    }

    fn with_media_type(config: &ApiConfig, media_type: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let media = HeaderValue::from_str(media_type)
            .map_err(|e| ToolError::Config(format!("Invalid media type '{}': {}", media_type, e)))?;
        headers.insert(CONTENT_TYPE, media.clone());
        headers.insert(ACCEPT, media);
        headers.insert(
            HeaderName::from_static("api-key"),
            header_value("api-key", &config.api_key)?,
        );
        headers.insert(
            HeaderName::from_static("api-secret"),
            header_value("api-secret", &config.api_secret)?,
        );

        let http = ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// Base URL of the instance, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full endpoint URL from a path such as `/api/v2/assets/devices`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a JSON POST; the caller classifies the result
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> reqwest::Result<Response> {
        self.http.post(self.endpoint(path)).json(body).send().await
    }

    /// Issue a GET; the caller classifies the result
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.http.get(self.endpoint(path)).send().await
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ToolError::Config(format!("Invalid value for header '{}': {}", name, e)))
}
