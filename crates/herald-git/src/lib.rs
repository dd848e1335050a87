//! Herald Git - Raw git log input
//!
//! This crate defines the `git log` format the preset expects and turns the
//! resulting text back into structured entries. Running git itself is left
//! to the caller.

mod log;
pub mod types;

pub use log::{parse_block, parse_log, COMMIT_FORMAT, COMMIT_SEPARATOR};
pub use types::LogEntry;
