//! Plain-text report rendering
//!
//! Produces the default console dump of an analysis report.

use crate::report::types::AnalysisReport;

/// Formats a report as an indented, human-readable dump
pub fn format_text_report(report: &AnalysisReport, url: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== SEO Report: {} ===\n\n", url));

    out.push_str("Page:\n");
    out.push_str(&format!("  Title: {}\n", report.title));
    out.push_str(&format!("  Description: {}\n", report.description));
    out.push('\n');

    out.push_str(&format!("Keywords ({}):\n", report.keywords.len()));
    for keyword in &report.keywords {
        out.push_str(&format!("  - {:?}\n", keyword));
    }
    out.push('\n');

    out.push_str("Heading Tags:\n");
    for (tag, count) in &report.heading_tags {
        out.push_str(&format!("  {}: {}\n", tag, count));
    }
    out.push('\n');

    out.push_str(&format!(
        "Images Without Alt: {}\n\n",
        report.images_without_alt
    ));

    out.push_str(&format!("Links ({}):\n", report.links.total()));
    out.push_str(&format!("  Internal: {}\n", report.links.internal));
    out.push_str(&format!("  External: {}\n", report.links.external));
    out.push_str(&format!("  Broken (no href): {}\n", report.links.broken));
    out.push('\n');

    out.push_str("Speed:\n");
    out.push_str(&format!("  Response time: {}ms\n", report.speed.response_time));
    out.push_str(&format!("  Load time: {}ms\n", report.speed.load_time));

    out
}
