//! Herald Changelog - Emoji-tagged commit changelogs
//!
//! This crate parses commit headers such as `✅ [ADD] (api) New route`,
//! normalizes and classifies them, and renders a changelog through the
//! preset's templates.

pub mod filter;
pub mod normalize;
pub mod parser;
pub mod preset;
pub mod transform;
pub mod types;
pub mod writer;

pub use parser::{CommitParser, HeaderParser};
pub use preset::Preset;
pub use transform::CommitTransform;
pub use types::{Category, CommitGroup, CommitRecord, CommitType, TypeCode};
pub use writer::{ChangelogWriter, WriterContext};
