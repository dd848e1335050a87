//! Herald Core - Shared types for the herald changelog preset
//!
//! This crate provides error handling, configuration loading and the
//! identity map used to annotate commits with display names.

pub mod config;
pub mod error;
pub mod identity;

pub use config::{Config, RepositoryType};
pub use error::{ConfigError, HeraldError, PresetError, Result};
pub use identity::IdentityMap;
