//! Core project components
//!
//! This module contains the building blocks a comparison reads from:
//!
//! - `git`: the Git command-line tool, invoked as a subprocess
//! - `history`: the snapshot history store (index discovery and snapshot reads)
//! - `repository`: high-level coordination of the areas below
//! - `workspace`: working copy file reads

pub mod git;
pub mod history;
pub mod repository;
pub mod workspace;
