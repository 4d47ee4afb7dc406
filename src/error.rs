use thiserror::Error;

/// Result type alias for sentiment pipeline operations
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Error types for pipeline construction and submission
///
/// Network-level failures are not errors: the pipeline folds them into
/// [`crate::types::Outcome`] so the caller always receives a renderable
/// result. Only pre-flight conditions (rejected input, bad configuration)
/// surface through this enum.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("tweet is empty after trimming whitespace")]
    EmptyInput,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl SentimentError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}
