//! Commit history queries
//!
//! `git log` is run with a fixed `%H|%an|%ad|%s` format and ISO dates; the
//! lines are parsed back into [`CommitEntry`] values. Only lines that start
//! with a full commit id are read, so patch output interleaved by `-L` is
//! skipped.

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub const LOG_FORMAT: &str = "--pretty=format:%H|%an|%ad|%s";
pub const LOG_DATE: &str = "--date=iso";
pub const GIT_ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
/// Repository-wide listings stop here unless a limit is given.
pub const DEFAULT_REPOSITORY_LIMIT: usize = 50;
// SHA-1 and SHA-256 object ids
const COMMIT_LINE_REGEX: &str = r"^([0-9a-f]{40}|[0-9a-f]{64})\|([^|]*)\|([^|]*)\|(.*)$";
const SHORT_ID_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilter {
    /// Every commit, or every commit touching the file following renames.
    File,
    /// Commits touching a line range (`git log -L`). Needs a file.
    LineRange { start: u32, end: u32 },
    /// Commits adding or removing a string (`git log -S`).
    Pickaxe(String),
    /// Commits whose added or removed lines match a regex (`git log -G`).
    Grep(String),
}

/// A `git log` invocation. Without a path the whole repository is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub path: Option<String>,
    pub limit: Option<usize>,
    pub filter: LogFilter,
}

impl LogQuery {
    pub fn file(path: impl Into<String>) -> Self {
        LogQuery {
            path: Some(path.into()),
            limit: None,
            filter: LogFilter::File,
        }
    }

    pub fn repository() -> Self {
        LogQuery {
            path: None,
            limit: Some(DEFAULT_REPOSITORY_LIMIT),
            filter: LogFilter::File,
        }
    }

    /// Replaces the limit; `None` keeps the current one.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if limit.is_some() {
            self.limit = limit;
        }
        self
    }

    pub fn with_filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn to_args(&self) -> anyhow::Result<Vec<String>> {
        let mut args = vec!["log".to_string()];

        if let Some(limit) = self.limit {
            args.push("-n".to_string());
            args.push(limit.to_string());
        }

        match (&self.filter, &self.path) {
            (LogFilter::File, Some(_)) => args.push("--follow".to_string()),
            (LogFilter::File, None) => {}
            (LogFilter::LineRange { start, end }, Some(path)) => {
                args.push("-L".to_string());
                args.push(format!("{start},{end}:{path}"));
            }
            (LogFilter::LineRange { .. }, None) => {
                anyhow::bail!("line range history needs a file")
            }
            (LogFilter::Pickaxe(text), _) => {
                args.push("-S".to_string());
                args.push(text.clone());
            }
            (LogFilter::Grep(pattern), _) => {
                args.push("-G".to_string());
                args.push(pattern.clone());
            }
        }

        args.push(LOG_FORMAT.to_string());
        args.push(LOG_DATE.to_string());

        // -L names its file in the range argument and rejects pathspecs
        let takes_pathspec = !matches!(self.filter, LogFilter::LineRange { .. });
        if let Some(path) = self.path.as_ref().filter(|_| takes_pathspec) {
            args.push("--".to_string());
            args.push(path.clone());
        }

        Ok(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitEntry {
    pub id: String,
    pub author: String,
    pub date: DateTime<FixedOffset>,
    pub subject: String,
}

impl CommitEntry {
    pub fn parse_log(output: &str) -> anyhow::Result<Vec<Self>> {
        let re = regex::Regex::new(COMMIT_LINE_REGEX)
            .with_context(|| format!("invalid commit line regex: {COMMIT_LINE_REGEX}"))?;

        output
            .lines()
            .filter_map(|line| re.captures(line))
            .map(|captures| {
                let date = DateTime::parse_from_str(&captures[3], GIT_ISO_DATE_FORMAT)
                    .with_context(|| format!("invalid commit date: {}", &captures[3]))?;

                Ok(CommitEntry {
                    id: captures[1].to_string(),
                    author: captures[2].to_string(),
                    date,
                    subject: captures[4].to_string(),
                })
            })
            .collect()
    }

    pub fn short_id(&self) -> &str {
        &self.id[..SHORT_ID_LENGTH.min(self.id.len())]
    }

    pub fn readable_timestamp(&self) -> String {
        self.date.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }
}
