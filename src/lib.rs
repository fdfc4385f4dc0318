//! chronos: browse a project's snapshot history and Git history, and compare
//! any two versions of a file.
//!
//! The crate is organised the same way as a small Git tool:
//!
//! - `areas`: things that live on disk or behind a subprocess (the Git tool,
//!   the working copy, the snapshot history store) and the `Repository` that
//!   owns them
//! - `artifacts`: the data types and algorithms that flow between areas
//!   (version references, resolutions, patches, log entries, configuration)
//! - `commands`: user-facing operations that write their output to the
//!   repository writer

use crate::areas::repository::Repository;
use crate::artifacts::config::ChronosConfig;
use crate::artifacts::diff::comparison::ComparisonResult;
use crate::artifacts::reference::version_reference::VersionReference;
use std::path::Path;

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use crate::areas::history::load_index;

/// How a command renders a comparison or listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputFormat::Json } else { OutputFormat::Text }
    }
}

/// Compares two versions of a file in the project at `project_root`.
pub async fn compare(
    project_root: &Path,
    a: &VersionReference,
    b: &VersionReference,
) -> ComparisonResult {
    let config = ChronosConfig::load(project_root);
    let repository = Repository::with_config(project_root, config, Box::new(std::io::sink()));

    repository.comparator().compare(a, b).await
}
