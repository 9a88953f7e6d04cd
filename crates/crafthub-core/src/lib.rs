//! Assistant session engine for Crafthub.
//!
//! This crate holds the behavior behind the dashboards' embedded assistant:
//! canned content tables, the session state machine with its cancellable
//! deferred replies, and the broadcast events hosts subscribe to. It depends only
//! on `crafthub-types` -- never on `crafthub-infra` or any IO crate.

pub mod assistant;
