//! termenu demo library - the sample menu tree behind the `termenu` binary.
//!
//! The menu, its configuration and logging setup live here rather than in
//! main.rs so the whole tree can be driven from integration tests.

pub mod app;
pub mod config;
pub mod logging;
pub mod state;
