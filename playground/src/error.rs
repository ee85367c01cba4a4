use thiserror::Error;

/// Why the dataset preview could not be used. Never fatal: callers fall back
/// to synthetic points.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("malformed preview body: {0}")]
    Decode(String),
    #[error("preview arrays disagree in length: x={x}, y={y}, target={target}")]
    LengthMismatch { x: usize, y: usize, target: usize },
    #[error("preview task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Preview(#[from] PreviewError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}
