//! LogView viewer: library crate behind the `lv-viewer` binary.
//!
//! Re-exports all modules so external crates (e.g. `lv-e2e-tests`) can
//! drive the CLI mapping, configuration, and `ToolRegistry` directly.

pub mod cli;
pub mod config;
pub mod registry;
