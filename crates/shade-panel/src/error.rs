use thiserror::Error;

/// Invalid panel configuration. Returned before any panel state exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("initial background alpha percentage {0} is outside 0..=100")]
    InitialAlphaOutOfRange(i32),

    #[error("final background alpha percentage {0} is outside 0..=100")]
    FinalAlphaOutOfRange(i32),

    #[error("settle close percentage {0} is outside 0.0..=1.0")]
    SettlePercentageOutOfRange(f32),

    #[error("{name} must be positive, got {value}")]
    NonPositiveThreshold { name: &'static str, value: f32 },

    #[error("failed to parse panel configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure reported by the status bar service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("status bar service is unavailable")]
    Unavailable,

    #[error("status bar service call failed: {0}")]
    Remote(String),
}
