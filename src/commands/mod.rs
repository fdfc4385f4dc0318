//! Command implementations
//!
//! Commands are split the way Git splits its own:
//!
//! - `plumbing`: low-level access to a single resolved version (`show`)
//! - `porcelain`: user-facing workflows (`compare`, `history`, `log`,
//!   `details`, `status`, `branches`)
//!
//! Every command is an `impl Repository` block writing to the repository writer.

pub mod plumbing;
pub mod porcelain;
