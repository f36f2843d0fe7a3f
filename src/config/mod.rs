//! Configuration module for seo-audit
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so running without a file
//! is the common case.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-audit.toml")).unwrap();
//! println!("Report format: {:?}", config.report.format);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ClientConfig, Config, ReportConfig, DEFAULT_DESCRIPTION_PLACEHOLDER,
    DEFAULT_TITLE_PLACEHOLDER,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};

// Re-export validation for settings merged after loading
pub use validation::validate as validate_config;
