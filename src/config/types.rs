use crate::report::ReportFormat;
use serde::Deserialize;

/// Placeholder used when a page has no usable `<title>`
pub const DEFAULT_TITLE_PLACEHOLDER: &str = "No title";

/// Placeholder used when a page has no usable meta description
pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "No description";

/// Main configuration structure for seo-audit
///
/// Every section is optional. An absent file is equivalent to
/// `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// HTTP client configuration
///
/// Unset values leave the client's own defaults in place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Value for the `User-Agent` request header
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default)]
    pub connect_timeout_secs: Option<u64>,
}

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Substituted for a missing or empty page title
    #[serde(rename = "title-placeholder", default = "default_title_placeholder")]
    pub title_placeholder: String,

    /// Substituted for a missing or empty meta description
    #[serde(
        rename = "description-placeholder",
        default = "default_description_placeholder"
    )]
    pub description_placeholder: String,

    /// Rendering used when writing the report
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title_placeholder: default_title_placeholder(),
            description_placeholder: default_description_placeholder(),
            format: ReportFormat::default(),
        }
    }
}

fn default_title_placeholder() -> String {
    DEFAULT_TITLE_PLACEHOLDER.to_string()
}

fn default_description_placeholder() -> String {
    DEFAULT_DESCRIPTION_PLACEHOLDER.to_string()
}
