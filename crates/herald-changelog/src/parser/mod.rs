//! Commit parsing

mod header;

pub use header::{HeaderFields, HeaderParser, HEADER_CORRESPONDENCE, HEADER_PATTERN, MERGE_PATTERN};

use crate::types::CommitRecord;
use herald_git::LogEntry;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Turn a log entry into a record; headers that do not match still
    /// produce a record, just without structured fields
    fn parse(&self, entry: &LogEntry) -> CommitRecord;
}
