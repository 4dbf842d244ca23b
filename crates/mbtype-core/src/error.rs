//! Error types for MBType

/// Result type alias using MBType's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for MBType operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The submitted post is missing or unusable
    #[error("input error: {0}")]
    Input(String),

    /// A model artifact failed to load or validate at startup
    #[error("model unavailable: {0}")]
    Model(String),

    /// A classifier failed on well-formed input
    #[error("inference error: {0}")]
    Inference(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
