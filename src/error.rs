//! Error handling for the toolkit
//!
//! This module defines the batch-fatal error type. Per-device resolution
//! failures are never represented here: they are data
//! ([`crate::resolve::ResolutionOutcome`]) so that one bad row can never
//! abort a batch.

use thiserror::Error;

/// Result type alias for the toolkit
pub type Result<T> = std::result::Result<T, ToolError>;

/// Main error type for the toolkit
#[derive(Error, Debug)]
pub enum ToolError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote API rejected a request (dashboard endpoints)
    #[error("API error: {0}")]
    Api(String),
}
