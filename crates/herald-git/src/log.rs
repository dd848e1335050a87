//! `git log` output parsing

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::types::LogEntry;

/// `git log --format` string producing one block per commit.
///
/// The message comes first, every other field is introduced by a literal
/// delimiter line.
pub const COMMIT_FORMAT: &str = concat!(
    "%B",
    "%n-hash-%n%H",
    "%n-gitTags-%n%d",
    "%n-committerDate-%n%ci",
    "%n-authorName-%n%aN",
    "%n-authorEmail-%n%aE",
    "%n-committerName-%n%cN",
    "%n-committerEmail-%n%cE",
);

/// Line separating two commit blocks in a log stream
pub const COMMIT_SEPARATOR: &str = "------------------------ >8 ------------------------";

const COMMITTER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Message,
    Hash,
    GitTags,
    CommitterDate,
    AuthorName,
    AuthorEmail,
    CommitterName,
    CommitterEmail,
}

impl Section {
    fn from_delimiter(line: &str) -> Option<Self> {
        match line.trim_end() {
            "-hash-" => Some(Self::Hash),
            "-gitTags-" => Some(Self::GitTags),
            "-committerDate-" => Some(Self::CommitterDate),
            "-authorName-" => Some(Self::AuthorName),
            "-authorEmail-" => Some(Self::AuthorEmail),
            "-committerName-" => Some(Self::CommitterName),
            "-committerEmail-" => Some(Self::CommitterEmail),
            _ => None,
        }
    }
}

/// Split a log stream on `separator` lines and parse every non-empty block
pub fn parse_log(text: &str, separator: &str) -> Vec<LogEntry> {
    let mut entries = Vec::new();
    let mut block = Vec::new();

    for line in text.lines() {
        if line.trim_end() == separator {
            push_block(&mut entries, &block);
            block.clear();
        } else {
            block.push(line);
        }
    }
    push_block(&mut entries, &block);

    debug!(count = entries.len(), "parsed log stream");
    entries
}

fn push_block(entries: &mut Vec<LogEntry>, lines: &[&str]) {
    if lines.iter().all(|l| l.trim().is_empty()) {
        return;
    }
    entries.push(parse_block(&lines.join("\n")));
}

/// Parse one commit block produced by [`COMMIT_FORMAT`]
pub fn parse_block(block: &str) -> LogEntry {
    let mut entry = LogEntry::default();
    let mut message: Vec<&str> = Vec::new();
    let mut section = Section::Message;
    let mut field: Vec<&str> = Vec::new();

    for line in block.lines() {
        if let Some(next) = Section::from_delimiter(line) {
            store(&mut entry, section, &field);
            field.clear();
            section = next;
            continue;
        }

        match section {
            Section::Message => message.push(line),
            _ => field.push(line),
        }
    }
    store(&mut entry, section, &field);

    let mut lines = message.into_iter().skip_while(|l| l.trim().is_empty());
    entry.header = lines.next().unwrap_or_default().to_string();
    entry.body = non_empty(&lines.collect::<Vec<_>>().join("\n"));

    entry
}

fn store(entry: &mut LogEntry, section: Section, lines: &[&str]) {
    let value = non_empty(&lines.join("\n"));

    match section {
        Section::Message => {}
        Section::Hash => entry.hash = value,
        Section::GitTags => entry.git_tags = value,
        Section::CommitterDate => entry.committer_date = value.as_deref().and_then(parse_date),
        Section::AuthorName => entry.author_name = value,
        Section::AuthorEmail => entry.author_email = value,
        Section::CommitterName => entry.committer_name = value,
        Section::CommitterEmail => entry.committer_email = value,
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_str(value, COMMITTER_DATE_FORMAT) {
        Ok(date) => Some(date.with_timezone(&Utc)),
        Err(e) => {
            warn!(value, error = %e, "unparseable committer date");
            None
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const BLOCK: &str = "✅ [ADD] (services) KeyStore collections can now be cloned

Body line one
Body line two
-hash-
0123456789abcdef0123456789abcdef01234567
-gitTags-
 (tag: v1.2.0)
-committerDate-
2024-03-05 14:30:00 +0100
-authorName-
Jane Doe
-authorEmail-
jane@example.com
-committerName-
John Roe
-committerEmail-
john@example.com";

    #[test]
    fn test_parse_block_fields() {
        let entry = parse_block(BLOCK);

        assert_eq!(
            entry.header,
            "✅ [ADD] (services) KeyStore collections can now be cloned"
        );
        assert_eq!(entry.body.as_deref(), Some("Body line one\nBody line two"));
        assert_eq!(
            entry.hash.as_deref(),
            Some("0123456789abcdef0123456789abcdef01234567")
        );
        assert_eq!(entry.tags(), vec!["v1.2.0"]);
        assert_eq!(entry.author_name.as_deref(), Some("Jane Doe"));
        assert_eq!(entry.author_email.as_deref(), Some("jane@example.com"));
        assert_eq!(entry.committer_name.as_deref(), Some("John Roe"));
        assert_eq!(entry.committer_email.as_deref(), Some("john@example.com"));

        let date = entry.committer_date.unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 5));
        assert_eq!(date.hour(), 13);
    }

    #[test]
    fn test_parse_block_keeps_header_indentation() {
        let entry = parse_block("\n ✴️ [FIX] (unitedMonthly) use getHighest date\n-hash-\nabc");
        assert_eq!(entry.header, " ✴️ [FIX] (unitedMonthly) use getHighest date");
        assert!(entry.body.is_none());
    }

    #[test]
    fn test_empty_sections_are_absent() {
        let entry = parse_block("Add default port AWS\n-hash-\nabc\n-gitTags-\n\n-committerEmail-\n");
        assert!(entry.git_tags.is_none());
        assert!(entry.committer_email.is_none());
        assert_eq!(entry.hash.as_deref(), Some("abc"));
    }

    #[test]
    fn test_bad_date_is_dropped() {
        let entry = parse_block("msg\n-committerDate-\nyesterday");
        assert!(entry.committer_date.is_none());
    }

    #[test]
    fn test_parse_log_splits_blocks() {
        let text = format!(
            "first\n-hash-\naaa\n{sep}\nsecond\n-hash-\nbbb\n{sep}\n",
            sep = COMMIT_SEPARATOR
        );
        let entries = parse_log(&text, COMMIT_SEPARATOR);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].header, "first");
        assert_eq!(entries[1].hash.as_deref(), Some("bbb"));
    }
}
