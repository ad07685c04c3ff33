//! Zellij sandbox filesystem conventions.
//!
//! Inside the plugin sandbox the host's working directory is mounted at
//! `/host` and the plugin's private data directory at `/data`.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
