//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit as extracted by [`COMMIT_FORMAT`](crate::COMMIT_FORMAT)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// First non-blank line of the message, untrimmed
    pub header: String,
    /// Rest of the message
    pub body: Option<String>,
    /// Commit hash (full)
    pub hash: Option<String>,
    /// Decorations (`%d`), e.g. `(HEAD -> main, tag: v1.2.0)`
    pub git_tags: Option<String>,
    /// Committer date
    pub committer_date: Option<DateTime<Utc>>,
    /// Author name
    pub author_name: Option<String>,
    /// Author email
    pub author_email: Option<String>,
    /// Committer name
    pub committer_name: Option<String>,
    /// Committer email
    pub committer_email: Option<String>,
}

impl LogEntry {
    /// Create an entry from a header line only
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Set the commit hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the committer identity
    pub fn with_committer(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.committer_name = Some(name.into());
        self.committer_email = Some(email.into());
        self
    }

    /// Tag names found in the decorations
    pub fn tags(&self) -> Vec<&str> {
        let Some(decorations) = self.git_tags.as_deref() else {
            return Vec::new();
        };

        decorations
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(',')
            .filter_map(|part| part.trim().strip_prefix("tag: "))
            .map(str::trim)
            .collect()
    }
}
