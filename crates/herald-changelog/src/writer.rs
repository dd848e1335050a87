//! Changelog rendering
//!
//! Runs the preset's transform over every commit, groups the accepted ones
//! by type label, sorts them and renders the preset's templates with Tera.

use std::cmp::Ordering;
use std::error::Error as _;

use chrono::{DateTime, Utc};
use herald_core::{PresetError, RepositoryType};
use herald_git::{parse_log, LogEntry, COMMIT_SEPARATOR};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info, instrument};

use crate::parser::{CommitParser, HeaderParser};
use crate::preset::Preset;
use crate::transform::CommitTransform;
use crate::types::{CommitGroup, CommitRecord};

const MAIN: &str = "main";
const HEADER: &str = "header";
const COMMIT: &str = "commit";

/// Release information shown in the changelog header
#[derive(Debug, Clone)]
pub struct WriterContext {
    /// Version being released
    pub version: Option<String>,
    /// Release title
    pub title: Option<String>,
    /// Release date
    pub date: DateTime<Utc>,
}

impl WriterContext {
    /// Context for an unversioned changelog dated now
    pub fn new() -> Self {
        Self {
            version: None,
            title: None,
            date: Utc::now(),
        }
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the release title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

impl Default for WriterContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderContext<'a> {
    version: Option<&'a str>,
    title: Option<&'a str>,
    date: String,
    repo_url: Option<&'a str>,
    repository_type: &'static str,
    commit_groups: Vec<CommitGroup>,
}

/// Changelog writer built from a [`Preset`]
pub struct ChangelogWriter {
    tera: Tera,
    parser: Box<dyn CommitParser>,
    transform: CommitTransform,
    group_by: &'static str,
    commit_groups_sort: &'static str,
    commits_sort: Vec<&'static str>,
    repository_type: RepositoryType,
    repo_url: Option<String>,
}

impl ChangelogWriter {
    /// Compile the preset's templates
    pub fn new(preset: &Preset) -> Result<Self, PresetError> {
        let opts = &preset.writer_opts;
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (HEADER, opts.header_partial.as_str()),
            (COMMIT, opts.commit_partial.as_str()),
            (MAIN, opts.main_template.as_str()),
        ])
        .map_err(|e| PresetError::InvalidTemplate {
            name: MAIN.to_string(),
            reason: error_chain(&e),
        })?;
        tera.autoescape_on(vec![]);

        Ok(Self {
            tera,
            parser: Box::new(HeaderParser::from_options(&preset.parser_opts)),
            transform: opts.transform.clone(),
            group_by: opts.group_by,
            commit_groups_sort: opts.commit_groups_sort,
            commits_sort: opts.commits_sort.to_vec(),
            repository_type: preset.repository_type,
            repo_url: preset.repo_url.clone(),
        })
    }

    /// Use a custom parser for log entries
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Transform commits, drop rejected ones, then group and sort them
    /// following the preset's directives
    pub fn group(&self, commits: impl IntoIterator<Item = CommitRecord>) -> Vec<CommitGroup> {
        let mut groups: Vec<CommitGroup> = Vec::new();

        for commit in commits.into_iter().filter_map(|c| self.transform.apply(c)) {
            let title = commit.field(self.group_by).unwrap_or_default().to_string();
            match groups.iter_mut().find(|g| g.title == title) {
                Some(group) => group.add_commit(commit),
                None => {
                    let mut group = CommitGroup::new(title);
                    group.add_commit(commit);
                    groups.push(group);
                }
            }
        }

        // Unknown sort keys keep first-seen order
        if self.commit_groups_sort == "title" {
            groups.sort_by(|a, b| a.title.cmp(&b.title));
        }

        for group in &mut groups {
            group.commits.sort_by(|a, b| {
                self.commits_sort
                    .iter()
                    .map(|field| a.field(field).cmp(&b.field(field)))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }

        groups
    }

    /// Render a changelog from parsed records
    #[instrument(skip(self, context, commits), fields(version = ?context.version))]
    pub fn write(
        &self,
        context: &WriterContext,
        commits: Vec<CommitRecord>,
    ) -> Result<String, PresetError> {
        let total = commits.len();
        let commit_groups = self.group(commits);
        let kept: usize = commit_groups.iter().map(|g| g.commits.len()).sum();
        info!(total, kept, groups = commit_groups.len(), "rendering changelog");

        let render = RenderContext {
            version: context.version.as_deref(),
            title: context.title.as_deref(),
            date: context.date.format("%Y-%m-%d").to_string(),
            repo_url: self.repo_url.as_deref(),
            repository_type: self.repository_type.as_str(),
            commit_groups,
        };

        let tera_context =
            Context::from_serialize(&render).map_err(|e| PresetError::Render(error_chain(&e)))?;
        let output = self
            .tera
            .render(MAIN, &tera_context)
            .map_err(|e| PresetError::Render(error_chain(&e)))?;

        debug!(output_len = output.len(), "changelog rendered");
        Ok(output)
    }

    /// Parse log entries and render them
    pub fn write_entries(
        &self,
        context: &WriterContext,
        entries: &[LogEntry],
    ) -> Result<String, PresetError> {
        let commits = entries.iter().map(|e| self.parser.parse(e)).collect();
        self.write(context, commits)
    }

    /// Parse a raw `git log` stream and render it
    pub fn write_log(&self, context: &WriterContext, log: &str) -> Result<String, PresetError> {
        self.write_entries(context, &parse_log(log, COMMIT_SEPARATOR))
    }
}

/// Tera hides the useful part of its errors in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
