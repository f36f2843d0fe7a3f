//! Report data structures
//!
//! The report is built once per analysis and handed straight to a renderer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// The six heading levels, in document order
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Classification of a single anchor element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Relative or same-site reference (includes `href=""`)
    Internal,
    /// Absolute `http...` or protocol-relative `//...` reference
    External,
    /// Anchor without any `href` attribute
    Broken,
}

/// Link classification counts over every anchor on the page
///
/// `broken` counts anchors that carry no `href` attribute at all. No request
/// is made to check whether a link target actually resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkCounts {
    pub internal: u64,
    pub external: u64,
    pub broken: u64,
}

impl LinkCounts {
    /// Records one classified anchor
    pub fn record(&mut self, kind: LinkKind) {
        match kind {
            LinkKind::Internal => self.internal += 1,
            LinkKind::External => self.external += 1,
            LinkKind::Broken => self.broken += 1,
        }
    }

    /// Total number of anchors recorded
    pub fn total(&self) -> u64 {
        self.internal + self.external + self.broken
    }
}

/// Timing measurements, in whole milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedMetrics {
    /// Request dispatch until the full body was received
    pub response_time: u64,
    /// Request dispatch until extraction finished
    pub load_time: u64,
}

impl SpeedMetrics {
    /// Builds metrics from raw durations, rounding each to the nearest ms
    pub fn from_durations(response_time: Duration, load_time: Duration) -> Self {
        Self {
            response_time: round_millis(response_time),
            load_time: round_millis(load_time),
        }
    }
}

/// Rounds a duration to the nearest whole millisecond
pub fn round_millis(duration: Duration) -> u64 {
    ((duration.as_nanos() + 500_000) / 1_000_000) as u64
}

/// Signals extracted from a parsed page, before timings are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub heading_tags: BTreeMap<String, u64>,
    pub images_without_alt: u64,
    pub links: LinkCounts,
}

/// The complete on-page SEO report for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub heading_tags: BTreeMap<String, u64>,
    pub images_without_alt: u64,
    pub links: LinkCounts,
    pub speed: SpeedMetrics,
}

/// Assembles the final report from extracted signals and timings
pub fn assemble_report(signals: PageSignals, speed: SpeedMetrics) -> AnalysisReport {
    AnalysisReport {
        title: signals.title,
        description: signals.description,
        keywords: signals.keywords,
        heading_tags: signals.heading_tags,
        images_without_alt: signals.images_without_alt,
        links: signals.links,
        speed,
    }
}
