//! Working tree status
//!
//! Parsed from `git status --porcelain`; each line becomes a [`StatusEntry`]
//! whose two-letter code is mapped to a readable [`file_change::StatusKind`].

pub mod file_change;

pub use file_change::{StatusEntry, StatusKind};
