//! Email to display name lookup
//!
//! The map is built once per changelog run and never mutated afterwards, so
//! it can be shared freely between the per-commit transforms.

use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;

/// Read-only email to display name table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    names: HashMap<String, String>,
}

impl IdentityMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge two sources; entries of `overrides` win on the same email
    pub fn merged<B, O>(base: B, overrides: O) -> Self
    where
        B: IntoIterator<Item = (String, String)>,
        O: IntoIterator<Item = (String, String)>,
    {
        let mut names: HashMap<String, String> = base.into_iter().collect();
        names.extend(overrides);
        Self { names }
    }

    /// Build the map from the `users` and `extra_users` config tables
    pub fn from_config(config: &Config) -> Self {
        let map = Self::merged(config.users.clone(), config.extra_users.clone());
        debug!(identities = map.len(), "identity map built");
        map
    }

    /// Display name for an email, if known
    pub fn lookup(&self, email: &str) -> Option<&str> {
        self.names.get(email).map(String::as_str)
    }

    /// Number of known identities
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for IdentityMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
