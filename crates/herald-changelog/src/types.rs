//! Changelog types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Type code used when a header carries no recognizable tag
pub const DEFAULT_TYPE: &str = "DEFAULT";

/// Scope given to commits that name none
pub const DEFAULT_SCOPE: &str = "Miscellaneous";

/// Scope of release and merge commits
pub const RELEASE_SCOPE: &str = "Release";

/// Bracketed short codes of the commit convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `[ADD]` new feature
    Add,
    /// `[DOC]` documentation
    Doc,
    /// `[FIX]` bug fix
    Fix,
    /// `[MOD]` behaviour change
    Mod,
    /// `[PUB]` publication / version bump
    Pub,
    /// `[TEST]` tests
    Test,
}

impl TypeCode {
    /// Category this code is grouped under
    pub fn category(&self) -> Category {
        match self {
            Self::Add => Category::Features,
            Self::Doc => Category::Documentation,
            Self::Fix => Category::BugFixes,
            Self::Mod => Category::NotableChanges,
            Self::Pub => Category::Versioning,
            Self::Test => Category::Testing,
        }
    }

    /// The bracketed code as written in headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Doc => "DOC",
            Self::Fix => "FIX",
            Self::Mod => "MOD",
            Self::Pub => "PUB",
            Self::Test => "TEST",
        }
    }
}

impl std::str::FromStr for TypeCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "DOC" => Ok(Self::Doc),
            "FIX" => Ok(Self::Fix),
            "MOD" => Ok(Self::Mod),
            "PUB" => Ok(Self::Pub),
            "TEST" => Ok(Self::Test),
            _ => Err(()),
        }
    }
}

/// Changelog section a commit lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Features,
    Documentation,
    BugFixes,
    NotableChanges,
    Versioning,
    Testing,
}

impl Category {
    /// Resolve a raw code; anything outside the known codes is a notable change
    pub fn for_code(code: &str) -> Self {
        code.parse::<TypeCode>()
            .map(|c| c.category())
            .unwrap_or(Self::NotableChanges)
    }

    /// Section title shown in the changelog
    pub fn label(&self) -> &'static str {
        match self {
            Self::Features => "✅ Features",
            Self::Documentation => "☑️ Documentation",
            Self::BugFixes => "✴️ Bug Fixes",
            Self::NotableChanges => "🔄 Notable changes",
            Self::Versioning => "⏩ Versioning",
            Self::Testing => "🔀 Testing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `type` field of a record: a raw code until normalized, a label after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitType {
    /// Code as captured from the header
    Code(String),
    /// Display category after normalization
    Label(Category),
}

impl CommitType {
    /// The display category, once assigned
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Label(category) => Some(*category),
            Self::Code(_) => None,
        }
    }

    /// Text used for grouping and templates
    pub fn as_str(&self) -> &str {
        match self {
            Self::Code(code) => code.as_str(),
            Self::Label(category) => category.label(),
        }
    }
}

impl Serialize for CommitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One parsed commit, mutated in place by the normalizers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Original header line
    pub header: String,
    /// Message body
    pub body: Option<String>,
    /// Leading emoji run
    pub emoji: Option<String>,
    /// Type code, then display label
    #[serde(rename = "type")]
    pub commit_type: Option<CommitType>,
    /// Area of the codebase
    pub scope: Option<String>,
    /// Description following the tag and scope
    pub short_desc: Option<String>,
    /// Commit hash
    pub hash: Option<String>,
    /// Ref decorations
    pub git_tags: Option<String>,
    pub committer_date: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
    /// Email of whoever merged, set for merge commits
    pub merger_email: Option<String>,
    /// Display name of the committer, from the identity map
    pub username: Option<String>,
    /// Display name of the merger, from the identity map
    pub merger_username: Option<String>,
}

impl CommitRecord {
    /// Create a record holding only a header
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Display category, once the type has been normalized
    pub fn category(&self) -> Option<Category> {
        self.commit_type.as_ref().and_then(CommitType::category)
    }

    /// Field value by its template name, for grouping and sorting
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "header" => Some(&self.header),
            "body" => self.body.as_deref(),
            "emoji" => self.emoji.as_deref(),
            "type" => self.commit_type.as_ref().map(CommitType::as_str),
            "scope" => self.scope.as_deref(),
            "shortDesc" => self.short_desc.as_deref(),
            "hash" => self.hash.as_deref(),
            "gitTags" => self.git_tags.as_deref(),
            "authorName" => self.author_name.as_deref(),
            "authorEmail" => self.author_email.as_deref(),
            "committerName" => self.committer_name.as_deref(),
            "committerEmail" => self.committer_email.as_deref(),
            "mergerEmail" => self.merger_email.as_deref(),
            "username" => self.username.as_deref(),
            "mergerUsername" => self.merger_username.as_deref(),
            _ => None,
        }
    }

    /// Text the type normalizer inspects: the description, else the header
    pub fn description_or_header(&self) -> &str {
        match self.short_desc.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => &self.header,
        }
    }
}

/// A titled group of commits in the rendered changelog
#[derive(Debug, Clone, Serialize)]
pub struct CommitGroup {
    /// Group title (the type label)
    pub title: String,
    /// Commits in this group
    pub commits: Vec<CommitRecord>,
}

impl CommitGroup {
    /// Create a new group
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Add a commit to the group
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Check if group is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
