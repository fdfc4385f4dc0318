//! Version references and their resolution
//!
//! A comparison has two sides, each named by a [`version_reference::VersionReference`]:
//! the working copy, a snapshot from the local history, or a Git revision.
//!
//! - `version_reference`: the reference itself and its classification
//! - `resolution`: the outcome of resolving a reference (`Found` / `NotFound`)
//! - `resolver`: turns references into text content

pub mod resolution;
pub mod resolver;
pub mod version_reference;
