use thiserror::Error;

/// Errors raised at the crate's parsing boundaries (strings coming from the
/// UI, JSON configuration). Model and sampler operations never fail.
#[derive(Debug, Error)]
pub enum WaveError {
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("Unknown wave property '{0}'")]
    UnknownProperty(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WaveError>;
