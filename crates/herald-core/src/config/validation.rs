//! Configuration validation

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_users("users", &config.users)?;
    validate_users("extra_users", &config.extra_users)?;
    validate_repo_url(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_users(field: &str, users: &HashMap<String, String>) -> Result<()> {
    for (email, name) in users {
        if email.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "email cannot be empty".to_string(),
            }
            .into());
        }

        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.{}", field, email),
                message: "display name cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_repo_url(config: &Config) -> Result<()> {
    if let Some(url) = &config.repo_url {
        if url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "repo_url".to_string(),
                message: "repo_url cannot be empty when set".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
