//! High-level solve module: method dispatch behind a single entry point.

mod dispatch;
pub mod options;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use dispatch::{solve, try_solve};
pub use options::Options;
