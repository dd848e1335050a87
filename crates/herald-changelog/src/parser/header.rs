//! Emoji + bracketed tag header parser
//!
//! Recognizes headers of the form
//!
//! ```text
//! ✅ [ADD] (services) KeyStore collections can now be cloned
//! ```
//!
//! The emoji and the scope are optional, leading spaces and tabs are
//! tolerated. Text between the emoji and the tag is skipped, but without an
//! emoji the tag must open the header. Headers that do not match yield no
//! structured fields.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::CommitParser;
use crate::preset::ParserOptions;
use crate::types::{CommitRecord, CommitType};
use herald_git::LogEntry;

/// Pattern matched against each commit header
pub static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t]*(?:(?P<emoji>[\p{Extended_Pictographic}\x{FE0F}\x{200D}]+)[^\[]*?)?\[(?P<type>[A-Z]{3,4})\]\s(?:\((?P<scope>[^)]*)\))?\s?(?P<short_desc>.*)$",
    )
    .expect("Invalid regex")
});

/// Legacy GitHub merge commit header
pub static MERGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Merge pull request #\d+ from ").expect("Invalid regex")
});

/// Field names of the header pattern's capture groups, in order
pub const HEADER_CORRESPONDENCE: [&str; 4] = ["emoji", "type", "scope", "shortDesc"];

/// Structured fields captured from a header; groups that did not
/// participate in the match are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub emoji: Option<String>,
    pub commit_type: Option<String>,
    pub scope: Option<String>,
    pub short_desc: Option<String>,
}

impl HeaderFields {
    /// Fields paired with their names, in [`HEADER_CORRESPONDENCE`] order
    pub fn fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (HEADER_CORRESPONDENCE[0], self.emoji.as_deref()),
            (HEADER_CORRESPONDENCE[1], self.commit_type.as_deref()),
            (HEADER_CORRESPONDENCE[2], self.scope.as_deref()),
            (HEADER_CORRESPONDENCE[3], self.short_desc.as_deref()),
        ]
    }
}

/// Parser for the emoji + tag header convention
#[derive(Debug, Clone, Copy)]
pub struct HeaderParser {
    header_pattern: &'static Regex,
    merge_pattern: &'static Regex,
}

impl HeaderParser {
    /// Create a parser using the built-in patterns
    pub fn new() -> Self {
        Self::from_options(&ParserOptions::default())
    }

    /// Create a parser from a preset's parser options
    pub fn from_options(opts: &ParserOptions) -> Self {
        Self {
            header_pattern: opts.header_pattern,
            merge_pattern: opts.merge_pattern,
        }
    }

    /// Extract structured fields from a header line
    pub fn parse_header(&self, header: &str) -> HeaderFields {
        let Some(caps) = self.header_pattern.captures(header) else {
            trace!(header, "header does not follow the tag convention");
            return HeaderFields::default();
        };

        let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        HeaderFields {
            emoji: group("emoji"),
            commit_type: group("type"),
            scope: group("scope"),
            short_desc: group("short_desc"),
        }
    }

    /// Whether a header is a legacy pull request merge
    pub fn is_merge(&self, header: &str) -> bool {
        self.merge_pattern.is_match(header.trim_start())
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitParser for HeaderParser {
    fn parse(&self, entry: &LogEntry) -> CommitRecord {
        let fields = self.parse_header(&entry.header);

        // The committer of a merge commit is the person who merged it
        let merger_email = if self.is_merge(&entry.header) {
            entry.committer_email.clone()
        } else {
            None
        };

        CommitRecord {
            header: entry.header.clone(),
            body: entry.body.clone(),
            emoji: fields.emoji,
            commit_type: fields.commit_type.map(CommitType::Code),
            scope: fields.scope,
            short_desc: fields.short_desc,
            hash: entry.hash.clone(),
            git_tags: entry.git_tags.clone(),
            committer_date: entry.committer_date,
            author_name: entry.author_name.clone(),
            author_email: entry.author_email.clone(),
            committer_name: entry.committer_name.clone(),
            committer_email: entry.committer_email.clone(),
            merger_email,
            username: None,
            merger_username: None,
        }
    }
}
