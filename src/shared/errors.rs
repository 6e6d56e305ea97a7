use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Browser environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("Scroll offset unavailable: {0}")]
    ScrollOffset(String),

    #[error("Marker update failed: {0}")]
    MarkerUpdate(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
