use thiserror::Error;

/// Errors resolving an assistant host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no assistant is hosted by feature '{0}'")]
    UnknownFeature(String),
}

/// Errors from validating an [`AssistantConfig`](crate::config::AssistantConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("suggestion_probability must be within 0.0..=1.0, got {0}")]
    InvalidProbability(f64),

    #[error("event_capacity must be greater than zero")]
    ZeroEventCapacity,

    #[error("reply delay window overflows")]
    DelayOverflow,
}
