//! Field normalizers
//!
//! Each function cleans up one field of a [`CommitRecord`] in place and is
//! safe to call on records missing any optional field. They must run in the
//! order of [`CommitTransform`](crate::transform::CommitTransform):
//! description, type, scope, hash, username, merger. The type step reads the
//! description before the scope gets its default.

use herald_core::IdentityMap;

use crate::parser::MERGE_PATTERN;
use crate::types::{
    Category, CommitRecord, CommitType, TypeCode, DEFAULT_SCOPE, DEFAULT_TYPE, RELEASE_SCOPE,
};

/// Number of hash characters kept
pub const SHORT_HASH_LEN: usize = 7;

/// Trim the short description
pub fn description(commit: &mut CommitRecord) {
    if let Some(desc) = commit.short_desc.as_mut() {
        let trimmed = desc.trim();
        if trimmed.len() != desc.len() {
            *desc = trimmed.to_string();
        }
    }
}

/// Rewrite the raw type code to its display label.
///
/// Untagged commits whose description is a legacy pull request merge are
/// filed under versioning with a `Release` scope.
pub fn commit_type(commit: &mut CommitRecord) {
    let code = match &commit.commit_type {
        Some(CommitType::Label(_)) => return,
        Some(CommitType::Code(code)) if !code.trim().is_empty() => code.trim().to_string(),
        _ => DEFAULT_TYPE.to_string(),
    };

    let code = if code == DEFAULT_TYPE && MERGE_PATTERN.is_match(commit.description_or_header()) {
        if commit.scope.as_deref().map_or(true, |s| s.trim().is_empty()) {
            commit.scope = Some(RELEASE_SCOPE.to_string());
        }
        TypeCode::Pub.as_str().to_string()
    } else {
        code
    };

    commit.commit_type = Some(CommitType::Label(Category::for_code(&code)));
}

/// Trim the scope, default it, and capitalize its first character
pub fn scope(commit: &mut CommitRecord) {
    let trimmed = commit.scope.as_deref().map(str::trim).unwrap_or_default();
    let text = if trimmed.is_empty() {
        DEFAULT_SCOPE
    } else {
        trimmed
    };

    commit.scope = Some(capitalize(text));
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep the first seven characters of the hash
pub fn hash(commit: &mut CommitRecord) {
    if let Some(hash) = commit.hash.as_mut() {
        if let Some((idx, _)) = hash.char_indices().nth(SHORT_HASH_LEN) {
            hash.truncate(idx);
        }
    }
}

/// Resolve the committer's display name
pub fn username(commit: &mut CommitRecord, identities: &IdentityMap) {
    if let Some(name) = commit
        .committer_email
        .as_deref()
        .and_then(|email| identities.lookup(email))
    {
        commit.username = Some(name.to_string());
    }
}

/// Resolve the merger's display name
pub fn merger(commit: &mut CommitRecord, identities: &IdentityMap) {
    if let Some(name) = commit
        .merger_email
        .as_deref()
        .and_then(|email| identities.lookup(email))
    {
        commit.merger_username = Some(name.to_string());
    }
}
