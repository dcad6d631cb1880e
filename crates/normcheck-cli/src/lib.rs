//! Library components for the `normcheck` command-line tool.

pub mod config;
pub mod input;
pub mod logging;
