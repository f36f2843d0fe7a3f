//! seo-audit main entry point
//!
//! This is the command-line interface for the seo-audit page analyzer.

use clap::Parser;
use seo_audit::config::load_config_or_default;
use seo_audit::report::{render_report, write_report, ReportFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// seo-audit: a one-shot on-page SEO analyzer
///
/// Fetches a single page and reports its title, meta description, keywords,
/// heading counts, images without alt text, link classification, and
/// response/load timings.
#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(version = "1.0.0")]
#[command(about = "A one-shot on-page SEO analyzer", long_about = None)]
struct Cli {
    /// Address of the page to analyze
    #[arg(value_name = "URL", env = "SEO_AUDIT_URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// User-Agent header to send (overrides the config file)
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match load_config_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Command-line flags take precedence over the file
    if let Some(user_agent) = cli.user_agent {
        config.client.user_agent = Some(user_agent);
    }
    if let Some(timeout) = cli.timeout {
        config.client.timeout_secs = Some(timeout);
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Err(e) = seo_audit::config::validate_config(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let report = match seo_audit::analyze(&cli.url, &config).await {
        Ok(report) => report,
        // The analyzer has already logged the failure
        Err(_) => std::process::exit(1),
    };

    let rendered = render_report(&report, config.report.format, &cli.url)?;
    write_report(&rendered, cli.output.as_deref())?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so that stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_audit=info,warn"),
            1 => EnvFilter::new("seo_audit=debug,info"),
            2 => EnvFilter::new("seo_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
