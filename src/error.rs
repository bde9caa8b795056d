//! Error types for campaign planning, creative generation, and configuration.

use thiserror::Error;

/// Errors raised before any job is dispatched. Fatal for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one platform must be selected")]
    NoPlatforms,

    #[error("Logo and product photo are required to generate creatives (platform: {platform})")]
    MissingImageAssets { platform: String },

    #[error("A product photo is required to generate a video (platform: {platform})")]
    MissingProductPhoto { platform: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Classified failures reported by a creative generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Content rejected: {0}")]
    ContentRejected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Missing payload: {0}")]
    MissingPayload(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl GenerationError {
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, GenerationError::QuotaExhausted(_))
    }
}

/// Crate boundary errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Campaign file error: {0}")]
    CampaignFile(String),

    /// A run finished without a single creative; carries the aggregated summary.
    #[error("{0}")]
    NoCreatives(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
