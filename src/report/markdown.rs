//! Markdown report generation
//!
//! This module renders an analysis report as a Markdown document suitable for
//! pasting into tickets or committing next to a site's sources.

use crate::report::types::AnalysisReport;
use chrono::{DateTime, Utc};
use url::Url;

/// Formats a report as Markdown, stamped with the current time
pub fn format_markdown_report(report: &AnalysisReport, url: &str) -> String {
    format_markdown_report_at(report, url, Utc::now())
}

/// Formats a report as Markdown with an explicit generation timestamp
///
/// # Arguments
///
/// * `report` - The analysis report
/// * `url` - The analyzed address, as given by the caller
/// * `generated_at` - Timestamp printed in the header
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report_at(
    report: &AnalysisReport,
    url: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut md = String::new();

    md.push_str("# SEO Report\n\n");
    md.push_str(&format!("- **URL**: {}\n", url));
    if let Some(host) = host_of(url) {
        md.push_str(&format!("- **Host**: {}\n", host));
    }
    md.push_str(&format!(
        "- **Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("## Metadata\n\n");
    md.push_str(&format!("- **Title**: {}\n", escape_inline(&report.title)));
    md.push_str(&format!(
        "- **Description**: {}\n",
        escape_inline(&report.description)
    ));
    let keywords: Vec<String> = report
        .keywords
        .iter()
        .map(|k| format!("`{}`", k))
        .collect();
    md.push_str(&format!("- **Keywords**: {}\n\n", keywords.join(", ")));

    md.push_str("## Heading Tags\n\n");
    md.push_str("| Tag | Count |\n");
    md.push_str("|-----|-------|\n");
    for (tag, count) in &report.heading_tags {
        md.push_str(&format!("| {} | {} |\n", tag, count));
    }
    md.push('\n');

    md.push_str("## Images\n\n");
    md.push_str(&format!(
        "- **Without alt attribute**: {}\n\n",
        report.images_without_alt
    ));

    md.push_str("## Links\n\n");
    md.push_str("| Kind | Count |\n");
    md.push_str("|------|-------|\n");
    md.push_str(&format!("| Internal | {} |\n", report.links.internal));
    md.push_str(&format!("| External | {} |\n", report.links.external));
    md.push_str(&format!("| Broken (no href) | {} |\n", report.links.broken));
    md.push_str(&format!("| **Total** | {} |\n\n", report.links.total()));

    md.push_str("## Speed\n\n");
    md.push_str(&format!(
        "- **Response time**: {} ms\n",
        report.speed.response_time
    ));
    md.push_str(&format!("- **Load time**: {} ms\n", report.speed.load_time));

    md
}

/// Lowercased host of the analyzed address, if it parses
fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

fn escape_inline(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}
