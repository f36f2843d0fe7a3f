//! Report module for rendering and delivering analysis results
//!
//! This module handles:
//! - The report data model and its assembly from extracted signals
//! - Rendering as plain text, JSON, or Markdown
//! - Writing the rendered report to stdout or a file

mod markdown;
mod text;
mod types;

pub use markdown::{format_markdown_report, format_markdown_report_at};
pub use text::format_text_report;
pub use types::{
    assemble_report, round_millis, AnalysisReport, LinkCounts, LinkKind, PageSignals,
    SpeedMetrics, HEADING_TAGS,
};

use crate::ReportError;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

/// Output rendering for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable dump
    #[default]
    Text,
    /// Pretty-printed JSON with camelCase keys
    Json,
    /// Markdown document
    Markdown,
}

/// Renders a report in the requested format
///
/// # Arguments
///
/// * `report` - The report to render
/// * `format` - The output format
/// * `url` - The analyzed address, shown in the text and markdown headers
///
/// # Returns
///
/// * `Ok(String)` - The rendered report
/// * `Err(ReportError)` - JSON serialization failed
pub fn render_report(
    report: &AnalysisReport,
    format: ReportFormat,
    url: &str,
) -> Result<String, ReportError> {
    let rendered = match format {
        ReportFormat::Text => format_text_report(report, url),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        ReportFormat::Markdown => format_markdown_report(report, url),
    };

    Ok(rendered)
}

/// Writes a rendered report to `output_path`, or to stdout when no path is given
pub fn write_report(rendered: &str, output_path: Option<&Path>) -> Result<(), ReportError> {
    match output_path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
