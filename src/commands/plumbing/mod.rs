//! Plumbing commands
//!
//! Direct access to the building blocks porcelain commands compose.
//!
//! ## Commands
//!
//! - `show`: print the content a single version reference resolves to

pub mod show;
