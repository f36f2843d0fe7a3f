use crate::config::types::{ClientConfig, Config, ReportConfig};
use crate::ConfigError;

/// Upper bound for any configured timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_client_config(&config.client)?;
    validate_report_config(&config.report)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agent cannot be empty".to_string(),
            ));
        }

        // Control characters are not valid in a header value
        if user_agent.chars().any(|c| c.is_control()) {
            return Err(ConfigError::Validation(format!(
                "user_agent must not contain control characters, got {:?}",
                user_agent
            )));
        }
    }

    validate_timeout("timeout_secs", config.timeout_secs)?;
    validate_timeout("connect_timeout_secs", config.connect_timeout_secs)?;

    Ok(())
}

fn validate_timeout(name: &str, value: Option<u64>) -> Result<(), ConfigError> {
    match value {
        Some(secs) if !(1..=MAX_TIMEOUT_SECS).contains(&secs) => {
            Err(ConfigError::Validation(format!(
                "{} must be between 1 and {}, got {}",
                name, MAX_TIMEOUT_SECS, secs
            )))
        }
        _ => Ok(()),
    }
}

/// Validates report configuration
fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.title_placeholder.is_empty() {
        return Err(ConfigError::Validation(
            "title_placeholder cannot be empty".to_string(),
        ));
    }

    if config.description_placeholder.is_empty() {
        return Err(ConfigError::Validation(
            "description_placeholder cannot be empty".to_string(),
        ));
    }

    Ok(())
}
