//! Snapshot history
//!
//! The snapshot history is written by an editor extension: every save (and a
//! few other events) copies the file into a history directory and appends a
//! record to `index.json`. This module models that index and knows where the
//! directory can live.
//!
//! - `snapshot`: `SnapshotRecord`, `EventType` and `HistoryIndex`
//! - `discovery`: the ordered strategies that locate the history directory
//! - `workspace_storage`: editor workspace metadata used by one strategy

pub mod discovery;
pub mod snapshot;
pub mod workspace_storage;

/// Prefix that marks a path as a reference into the snapshot history.
pub const HISTORY_MARKER: &str = ".history/";
/// Name of the project-local history folder.
pub const HISTORY_FOLDER: &str = ".history";
pub const INDEX_FILE: &str = "index.json";
/// Folder created by the history extension inside its workspace storage entry.
pub const EXTENSION_STORAGE_FOLDER: &str = "IldioMartins.chronos-history";
