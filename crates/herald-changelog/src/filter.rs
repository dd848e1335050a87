//! Commit classification
//!
//! Release commits whose description is only a version number are the
//! automatic version bumps and stay out of the changelog. Release commits
//! with narrative text (published packages, merged pull requests) stay in.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Category, CommitRecord, RELEASE_SCOPE};

/// Digits and dots, optionally followed by a separator and anything else.
/// `1.2.3-garbage-text` matches as well.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+(?:[\s\-+_].*)?$").expect("Invalid regex"));

/// Whether a normalized record is a release commit
pub fn is_release_commit(commit: &CommitRecord) -> bool {
    commit.category() == Some(Category::Versioning)
        && commit.scope.as_deref() == Some(RELEASE_SCOPE)
}

/// Whether a description reads as a bare version number
pub fn is_version_number(text: &str) -> bool {
    VERSION_PATTERN.is_match(text)
}

/// Whether a normalized record belongs in the changelog
pub fn should_include(commit: &CommitRecord) -> bool {
    if !is_release_commit(commit) {
        return true;
    }

    match commit.short_desc.as_deref() {
        Some(desc) if !desc.is_empty() => !is_version_number(desc),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitType;

    fn release(short_desc: Option<&str>) -> CommitRecord {
        let mut commit = CommitRecord::new("⏩ [PUB] (release) x");
        commit.commit_type = Some(CommitType::Label(Category::Versioning));
        commit.scope = Some(RELEASE_SCOPE.to_string());
        commit.short_desc = short_desc.map(str::to_string);
        commit
    }

    #[test]
    fn test_version_bump_dropped() {
        assert!(!should_include(&release(Some("1.87.0"))));
    }

    #[test]
    fn test_release_narrative_kept() {
        assert!(should_include(&release(Some("Published sub-packages"))));
    }

    #[test]
    fn test_release_without_description_kept() {
        assert!(should_include(&release(None)));
        assert!(should_include(&release(Some(""))));
    }

    #[test]
    fn test_permissive_version_pattern() {
        assert!(is_version_number("1.2.3-garbage-text"));
        assert!(is_version_number("2.0.0 hotfix"));
        assert!(is_version_number("10"));
        assert!(!is_version_number("v1.2.3"));
        assert!(!is_version_number("1.2.3beta"));
    }

    #[test]
    fn test_version_text_outside_release_kept() {
        let mut commit = release(Some("1.87.0"));
        commit.scope = Some("Packages".to_string());
        assert!(!is_release_commit(&commit));
        assert!(should_include(&commit));

        let mut commit = release(Some("1.87.0"));
        commit.commit_type = Some(CommitType::Label(Category::Features));
        assert!(should_include(&commit));
    }

    #[test]
    fn test_scope_must_match_exactly() {
        let mut commit = release(Some("1.87.0"));
        commit.scope = Some("release".to_string());
        assert!(should_include(&commit));
    }
}
