//! Analyzer module for single-page SEO analysis
//!
//! The analysis is one sequential pipeline:
//! 1. Fetch the page with a single GET request, timing the response
//! 2. Parse the body into an HTML document
//! 3. Extract the SEO signals
//! 4. Assemble the report with response and load timings
//!
//! A fetch failure aborts the pipeline and no report is produced.

mod extractor;
mod fetcher;
mod parser;

pub use extractor::{classify_href, extract_signals, split_keywords};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::parse_document;

use crate::config::{Config, ReportConfig};
use crate::report::{assemble_report, AnalysisReport, PageSignals, SpeedMetrics};
use crate::SeoError;
use reqwest::Client;

/// Analyzes a single URL using a client built from `config`
///
/// # Arguments
///
/// * `url` - The address to analyze
/// * `config` - Client and report configuration
///
/// # Returns
///
/// * `Ok(AnalysisReport)` - The complete report
/// * `Err(SeoError)` - The client could not be built or the fetch failed
///
/// # Example
///
/// ```no_run
/// use seo_audit::{analyze, Config};
///
/// # async fn run() -> seo_audit::Result<()> {
/// let report = analyze("https://example.com/", &Config::default()).await?;
/// println!("{}", report.title);
/// # Ok(())
/// # }
/// ```
pub async fn analyze(url: &str, config: &Config) -> Result<AnalysisReport, SeoError> {
    let client = build_http_client(&config.client).map_err(|source| {
        tracing::error!("Failed to build HTTP client for {}: {}", url, source);
        SeoError::Http {
            url: url.to_string(),
            source,
        }
    })?;

    analyze_with_client(&client, url, &config.report).await
}

/// Analyzes a single URL with an existing HTTP client
pub async fn analyze_with_client(
    client: &Client,
    url: &str,
    config: &ReportConfig,
) -> Result<AnalysisReport, SeoError> {
    tracing::info!("Analyzing {}", url);

    let page = fetch_page(client, url).await?;
    if page.final_url != url {
        tracing::debug!("Redirected to {}", page.final_url);
    }

    let signals = inspect_body(&page.body, config);
    let load_time = page.started_at.elapsed();

    let report = assemble_report(
        signals,
        SpeedMetrics::from_durations(page.response_time, load_time),
    );

    tracing::info!(
        "Analysis of {} complete (status {}, {} links, {}ms response, {}ms load)",
        url,
        page.status_code,
        report.links.total(),
        report.speed.response_time,
        report.speed.load_time
    );

    Ok(report)
}

/// Parses a body and extracts its signals
///
/// The document does not outlive this call.
pub fn inspect_body(body: &str, config: &ReportConfig) -> PageSignals {
    let document = parse_document(body);
    let signals = extract_signals(&document, config);

    tracing::debug!(
        "Extracted signals: {} keywords, {} images without alt, {} links",
        signals.keywords.len(),
        signals.images_without_alt,
        signals.links.total()
    );

    signals
}
