//! Error types for herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Preset assembly and rendering errors
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Preset-related errors
#[derive(Debug, Error)]
pub enum PresetError {
    /// A template file could not be read; the preset cannot be built without it
    #[error("Failed to load template {}: {source}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template could not be compiled
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },

    /// Rendering the changelog failed
    #[error("Failed to render changelog: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_load_message_names_path() {
        let err: HeraldError = PresetError::TemplateLoad {
            path: PathBuf::from("templates/header.tera"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();

        let message = err.to_string();
        assert!(message.contains("templates/header.tera"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            field: "users".to_string(),
            message: "email cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: users - email cannot be empty"
        );
    }
}
