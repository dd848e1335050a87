//! Per-commit transform: normalize, then classify

use std::sync::Arc;

use herald_core::IdentityMap;
use tracing::{debug, instrument};

use crate::filter;
use crate::normalize;
use crate::types::CommitRecord;

/// The normalizer and filter pipeline applied to every commit
#[derive(Debug, Clone, Default)]
pub struct CommitTransform {
    identities: Arc<IdentityMap>,
}

impl CommitTransform {
    /// Create a transform resolving names through `identities`
    pub fn new(identities: Arc<IdentityMap>) -> Self {
        Self { identities }
    }

    /// Identity map used for username lookups
    pub fn identities(&self) -> &IdentityMap {
        &self.identities
    }

    /// Run every normalizer, in order
    pub fn normalize(&self, commit: &mut CommitRecord) {
        normalize::description(commit);
        normalize::commit_type(commit);
        normalize::scope(commit);
        normalize::hash(commit);
        normalize::username(commit, &self.identities);
        normalize::merger(commit, &self.identities);
    }

    /// Normalize a commit and return it if it belongs in the changelog
    #[instrument(level = "trace", skip(self, commit), fields(header = %commit.header))]
    pub fn apply(&self, mut commit: CommitRecord) -> Option<CommitRecord> {
        self.normalize(&mut commit);

        if filter::should_include(&commit) {
            Some(commit)
        } else {
            debug!(
                header = %commit.header,
                short_desc = commit.short_desc.as_deref().unwrap_or_default(),
                "dropping version bump commit"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CommitParser, HeaderParser};
    use crate::types::{Category, DEFAULT_SCOPE, RELEASE_SCOPE};
    use herald_git::LogEntry;

    fn run(transform: &CommitTransform, entry: LogEntry) -> Option<CommitRecord> {
        transform.apply(HeaderParser::new().parse(&entry))
    }

    #[test]
    fn test_full_pipeline() {
        let transform = CommitTransform::default();
        let entry = LogEntry::new(" ✴️ [FIX] (unitedMonthly)   use getHighest date  ")
            .with_hash("0123456789abcdef");

        let commit = run(&transform, entry).unwrap();
        assert_eq!(commit.category(), Some(Category::BugFixes));
        assert_eq!(commit.scope.as_deref(), Some("UnitedMonthly"));
        assert_eq!(commit.short_desc.as_deref(), Some("use getHighest date"));
        assert_eq!(commit.hash.as_deref(), Some("0123456"));
    }

    #[test]
    fn test_version_bump_dropped() {
        let transform = CommitTransform::default();
        assert!(run(&transform, LogEntry::new("⏩ [PUB] (release) 1.87.0")).is_none());
        assert!(run(&transform, LogEntry::new("⏩ [PUB] (release) Published sub-packages")).is_some());
    }

    #[test]
    fn test_untagged_commit_kept_as_notable_change() {
        let commit = run(&CommitTransform::default(), LogEntry::new("Add default port AWS")).unwrap();
        assert_eq!(commit.category(), Some(Category::NotableChanges));
        assert_eq!(commit.scope.as_deref(), Some(DEFAULT_SCOPE));
        assert!(commit.short_desc.is_none());
    }

    #[test]
    fn test_merge_commit_kept_as_release() {
        let identities: IdentityMap = vec![("merger@example.com".to_string(), "Merger".to_string())]
            .into_iter()
            .collect();
        let transform = CommitTransform::new(Arc::new(identities));
        let entry = LogEntry::new("Merge pull request #2334 from sportheroes/feature")
            .with_committer("m", "merger@example.com");

        let commit = run(&transform, entry).unwrap();
        assert_eq!(commit.category(), Some(Category::Versioning));
        assert_eq!(commit.scope.as_deref(), Some(RELEASE_SCOPE));
        assert_eq!(commit.username.as_deref(), Some("Merger"));
        assert_eq!(commit.merger_username.as_deref(), Some("Merger"));
    }
}
