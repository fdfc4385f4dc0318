//! Branch listing
//!
//! Parsed from `git for-each-ref --format=%(objectname)|%(refname)|%(HEAD)`
//! over local and remote-tracking refs.

pub mod branch_name;

pub use branch_name::BranchEntry;
