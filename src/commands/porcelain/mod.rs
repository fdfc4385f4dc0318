//! Porcelain commands
//!
//! ## Commands
//!
//! - `compare`: patch between any two version references
//! - `details`: working tree or staged changes of one file
//! - `history`: snapshots recorded in the local history
//! - `log`: Git commits touching a file, a line range or a string
//! - `status`: working tree status
//! - `branches`: local and remote-tracking branches

pub mod branches;
pub mod compare;
pub mod details;
pub mod history;
pub mod log;
pub mod status;
