//! Shared domain types for Crafthub.
//!
//! This crate contains the types shared by the assistant session engine and
//! its hosts: modes, turns, session snapshots, events, configuration and
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod assistant;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
