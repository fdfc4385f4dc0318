//! Comparing two versions of a file
//!
//! - `temp_diff`: writes two blobs to temporary files and asks Git for a patch
//! - `patch`: hunk headers and line counts read back from a patch
//! - `comparison`: resolves both sides of a comparison and assembles the result
//!
//! There is no diff algorithm here; patches always come from
//! `git diff --no-index` (or `git diff` for working tree details).

pub mod comparison;
pub mod patch;
pub mod temp_diff;
