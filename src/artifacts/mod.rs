//! Data structures and algorithms
//!
//! - `branch`: branch listing parsed from `git for-each-ref`
//! - `config`: the explicit configuration object passed to every area
//! - `core`: shared utilities (pager wrapper, path normalisation)
//! - `diff`: temp-file diff runner, patch statistics and the comparison orchestrator
//! - `history`: snapshot records, the history index and directory discovery
//! - `log`: commit entries parsed from `git log`
//! - `reference`: version references and their resolution to text
//! - `status`: working tree status parsed from `git status --porcelain`

pub mod branch;
pub mod config;
pub mod core;
pub mod diff;
pub mod history;
pub mod log;
pub mod reference;
pub mod status;
