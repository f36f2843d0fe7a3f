//! seo-audit: a one-shot on-page SEO analyzer
//!
//! This crate fetches a single web page and extracts a fixed set of SEO signals
//! (title, meta description, keywords, heading counts, images without alt text,
//! link classification) along with response and load timings.

pub mod analyzer;
pub mod config;
pub mod report;

use thiserror::Error;

/// Main error type for seo-audit operations
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Report rendering and delivery errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for seo-audit operations
pub type Result<T> = std::result::Result<T, SeoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{analyze, analyze_with_client};
pub use config::Config;
pub use report::{AnalysisReport, LinkCounts, ReportFormat, SpeedMetrics};
