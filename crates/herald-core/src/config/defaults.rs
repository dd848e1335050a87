//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".herald.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".herald.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# herald configuration

# Selects the commit template variant: github or gitlab
repository_type: github

# Optional link target for commit hashes
# repo_url: https://github.com/example/project

# Email -> display name, applied to committers and mergers
users: {}

# Merged over `users`; entries here win on the same email
extra_users: {}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.users.is_empty());
        assert!(config.extra_users.is_empty());
    }

    #[test]
    fn test_default_config_yaml_mentions_repository_type() {
        assert!(default_config_yaml().contains("repository_type"));
    }
}
