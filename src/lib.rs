//! Sentiment Pipeline - resilient request pipeline for a remote tweet
//! sentiment-classification API
//!
//! This crate accepts user text, performs a bounded-retry HTTP POST against a
//! classification endpoint, interprets status codes and payload shape, and
//! yields one normalized [`Outcome`] (label + attempt latency, or a
//! categorized failure) that a presentation layer can render directly.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Input validation
pub mod input;

// Main functionality modules
pub mod http;
pub mod interpret;
pub mod pipeline;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use config::{PipelineConfig, PipelineConfigBuilder, RetryPolicy, DEFAULT_ENDPOINT};
pub use error::{Result, SentimentError};
pub use http::HttpPredictClient;
pub use input::{TweetInput, SOFT_CHAR_LIMIT};
pub use pipeline::SentimentPipeline;
pub use traits::PredictClient;
pub use types::{FailureKind, Outcome, RawResponse, Sentiment};

/// Classify a single tweet with the default endpoint configuration
///
/// Builds a one-shot pipeline; callers issuing repeated requests should hold
/// a [`SentimentPipeline`] instead to reuse its connection pool.
pub async fn classify_tweet(text: &str) -> Result<Outcome> {
    let pipeline = SentimentPipeline::new(PipelineConfig::default())?;
    pipeline.classify(text).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the re-exported configuration surface works end to end
    #[test]
    fn test_config_surface() {
        let config = PipelineConfig::builder()
            .endpoint("http://127.0.0.1:9000/predict")
            .timeout_seconds(5)
            .max_attempts(2)
            .build()
            .unwrap();

        assert_eq!(config.retry.max_attempts, 2);
        assert!(SentimentPipeline::new(config).is_ok());
    }

    /// Test that error types render their context
    #[test]
    fn test_error_types() {
        let error = SentimentError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = SentimentError::EmptyInput;
        assert!(error.to_string().contains("empty"));
    }

    /// Test that the outcome taxonomy is renderable as-is
    #[test]
    fn test_outcome_rendering() {
        let outcome = Outcome::success(Sentiment::Positive, std::time::Duration::from_millis(321));
        assert_eq!(outcome.label().unwrap().to_string(), "Positive");
        assert_eq!(outcome.latency_seconds(), Some(0.321));

        let outcome = Outcome::failure(FailureKind::ConnectionFailed);
        assert!(outcome
            .failure_kind()
            .unwrap()
            .to_string()
            .contains("connect"));
    }
}
