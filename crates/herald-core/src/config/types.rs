//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Main configuration for the herald preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository flavor, selects the commit template variant
    pub repository_type: RepositoryType,

    /// Repository URL handed to templates for commit links
    pub repo_url: Option<String>,

    /// Directory holding the templates, defaults to the bundled ones
    pub templates_dir: Option<PathBuf>,

    /// Email to display name
    pub users: HashMap<String, String>,

    /// Email to display name, overrides `users` on the same email
    pub extra_users: HashMap<String, String>,
}

/// Hosting flavor of the repository
///
/// Parsing is lenient: anything that is not `gitlab` (case-insensitive) is
/// treated as GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepositoryType {
    /// GitHub (default)
    #[default]
    GitHub,
    /// GitLab
    GitLab,
}

impl RepositoryType {
    /// Resolve a configured flavor name
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("gitlab") {
            Self::GitLab
        } else {
            Self::GitHub
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }
}

impl From<String> for RepositoryType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<RepositoryType> for String {
    fn from(repository_type: RepositoryType) -> Self {
        repository_type.as_str().to_string()
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_is_case_insensitive() {
        assert_eq!(RepositoryType::from_name("GitLab"), RepositoryType::GitLab);
        assert_eq!(RepositoryType::from_name("GITHUB"), RepositoryType::GitHub);
    }

    #[test]
    fn test_unknown_repository_type_defaults_to_github() {
        assert_eq!(RepositoryType::from_name("bitbucket"), RepositoryType::GitHub);
        assert_eq!(RepositoryType::from_name(""), RepositoryType::GitHub);
    }

    #[test]
    fn test_deserialize_repository_type() {
        let config: Config = serde_yaml::from_str("repository_type: GITLAB\n").unwrap();
        assert_eq!(config.repository_type, RepositoryType::GitLab);

        let config: Config = serde_yaml::from_str("repository_type: svn\n").unwrap();
        assert_eq!(config.repository_type, RepositoryType::GitHub);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("repo_url = \"https://example.com/repo\"\n").unwrap();
        assert_eq!(config.repository_type, RepositoryType::GitHub);
        assert!(config.users.is_empty());
        assert!(config.templates_dir.is_none());
    }
}
