//! Infrastructure for Crafthub hosts.
//!
//! Resolves the data directory and loads `config.toml`. The session engine
//! in `crafthub-core` stays free of any IO.

pub mod config;
pub mod filesystem;
