use thiserror::Error;

/// Top-level error type for AgroLens.
#[derive(Debug, Error)]
pub enum AgroError {
    /// Camera or microphone denied, unavailable, or already in use.
    #[error("device error: {0}")]
    Device(String),

    /// Error from a crop or soil analyzer.
    #[error("analysis error: {0}")]
    Analysis(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A language code outside the configured set.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
