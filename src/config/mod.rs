//! Toolkit configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection configuration for the Axonius API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Instance base URL, e.g. `https://axonius.example.com`
    pub base_url: String,

    /// API key header credential
    pub api_key: String,

    /// API secret header credential
    pub api_secret: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Maximum number of assets requested per search page
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl ApiConfig {
    /// Create a configuration from explicit credentials
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            // Trailing slash would double up when joining paths
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            timeout: default_timeout(),
            page_limit: default_page_limit(),
        }
    }

    /// Validate the configuration before any network use
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Axonius URL is required".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("Invalid Axonius URL: {}", self.base_url));
        }

        if self.api_key.is_empty() {
            return Err("API key is required".to_string());
        }

        if self.api_secret.is_empty() {
            return Err("API secret is required".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.page_limit == 0 {
            return Err("Page limit must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://ax.example.com/", "key", "secret");
        assert_eq!(config.base_url(), "https://ax.example.com");
    }

    #[test]
    fn validate_rejects_missing_credentials() {
        let config = ApiConfig::new("https://ax.example.com", "", "secret");
        assert!(config.validate().is_err());

        let config = ApiConfig::new("https://ax.example.com", "key", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = ApiConfig::new("not a url", "key", "secret");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = ApiConfig::new("https://ax.example.com", "key", "secret");
        assert!(config.validate().is_ok());
    }
}
