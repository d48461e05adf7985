use thiserror::Error;

/// Result type for segmenter operations
pub type Result<T> = std::result::Result<T, SegmenterError>;

/// Errors that can occur around segmentation.
///
/// Segmenting text never fails; these cover loading sources and configuration.
#[derive(Error, Debug)]
pub enum SegmenterError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Source file is not valid UTF-8
    #[error("Source is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl SegmenterError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
