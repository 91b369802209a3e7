//! Command handlers.
//!
//! Each handler receives the composed [`CliContext`](crate::bootstrap::CliContext)
//! and returns the batch it produced so callers can inspect it.

pub mod create;
pub mod get;
