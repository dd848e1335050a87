//! Preset assembly
//!
//! A [`Preset`] bundles what a changelog run needs: the header pattern for
//! parsing, the per-commit transform, the grouping directives and the three
//! template texts. Templates are read from disk once; if any of them is
//! missing no preset is produced.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use herald_core::{Config, HeraldError, IdentityMap, PresetError, RepositoryType};
use regex::Regex;
use tracing::{debug, info, instrument};

use crate::parser::{HEADER_CORRESPONDENCE, HEADER_PATTERN, MERGE_PATTERN};
use crate::transform::CommitTransform;

/// Main template file name
pub const MAIN_TEMPLATE: &str = "template.tera";

/// Header partial file name
pub const HEADER_TEMPLATE: &str = "header.tera";

/// Commit partial for GitHub repositories
pub const COMMIT_TEMPLATE: &str = "commit.tera";

/// Commit partial for GitLab repositories
pub const COMMIT_TEMPLATE_GITLAB: &str = "commit-gitlab.tera";

/// Field records are grouped by
pub const GROUP_BY: &str = "type";

/// Field groups are sorted by
pub const COMMIT_GROUPS_SORT: &str = "title";

/// Fields commits are sorted by within a group
pub const COMMITS_SORT: [&str; 2] = ["scope", "shortDesc"];

/// Parsing half of the preset
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Header pattern
    pub header_pattern: &'static Regex,
    /// Names of the header pattern's groups, in order
    pub header_correspondence: [&'static str; 4],
    /// Legacy merge commit pattern
    pub merge_pattern: &'static Regex,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            header_pattern: &HEADER_PATTERN,
            header_correspondence: HEADER_CORRESPONDENCE,
            merge_pattern: &MERGE_PATTERN,
        }
    }
}

/// Writing half of the preset
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Per-commit normalize + filter step
    pub transform: CommitTransform,
    pub group_by: &'static str,
    pub commit_groups_sort: &'static str,
    pub commits_sort: [&'static str; 2],
    /// Main template text
    pub main_template: String,
    /// Header partial text
    pub header_partial: String,
    /// Commit partial text
    pub commit_partial: String,
}

/// Configuration consumed by the changelog writer
#[derive(Debug, Clone)]
pub struct Preset {
    pub parser_opts: ParserOptions,
    pub writer_opts: WriterOptions,
    /// Flavor the commit partial was chosen for
    pub repository_type: RepositoryType,
    /// Repository URL for links, if configured
    pub repo_url: Option<String>,
}

impl Preset {
    /// Assemble the preset, reading the three templates concurrently
    #[instrument(skip(config), fields(repository_type = %config.repository_type))]
    pub async fn load(config: &Config) -> Result<Self, PresetError> {
        let dir = templates_dir(config);
        info!(dir = %dir.display(), "loading preset templates");

        let (main_template, header_partial, commit_partial) = tokio::try_join!(
            read_template(dir.join(MAIN_TEMPLATE)),
            read_template(dir.join(HEADER_TEMPLATE)),
            read_template(dir.join(commit_template(config.repository_type))),
        )?;

        let identities = IdentityMap::from_config(config);
        debug!(identities = identities.len(), "preset assembled");

        Ok(Self {
            parser_opts: ParserOptions::default(),
            writer_opts: WriterOptions {
                transform: CommitTransform::new(Arc::new(identities)),
                group_by: GROUP_BY,
                commit_groups_sort: COMMIT_GROUPS_SORT,
                commits_sort: COMMITS_SORT,
                main_template,
                header_partial,
                commit_partial,
            },
            repository_type: config.repository_type,
            repo_url: config.repo_url.clone(),
        })
    }

    /// Blocking variant of [`Preset::load`] for callers without a runtime
    pub fn load_blocking(config: &Config) -> herald_core::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HeraldError::Io)?;

        Ok(runtime.block_on(Self::load(config))?)
    }

    /// `git log --format` string the preset expects as input
    pub fn commit_format(&self) -> &'static str {
        herald_git::COMMIT_FORMAT
    }
}

/// Template directory: the configured one, or the templates shipped with
/// this crate
pub fn templates_dir(config: &Config) -> PathBuf {
    config
        .templates_dir
        .clone()
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Commit partial file for a repository flavor
pub fn commit_template(repository_type: RepositoryType) -> &'static str {
    match repository_type {
        RepositoryType::GitHub => COMMIT_TEMPLATE,
        RepositoryType::GitLab => COMMIT_TEMPLATE_GITLAB,
    }
}

async fn read_template(path: PathBuf) -> Result<String, PresetError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            debug!(path = %path.display(), len = content.len(), "template read");
            Ok(content)
        }
        Err(source) => Err(PresetError::TemplateLoad { path, source }),
    }
}
