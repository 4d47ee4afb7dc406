use crate::error::{Result, SentimentError};
use std::time::Duration;
use url::Url;

/// Predict endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://nlp-tweet-sentiment-project.onrender.com/predict";

/// Per-attempt request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry behavior for rate-limited responses
///
/// Only HTTP 429 is retried; the backoff before the retry after zero-based
/// attempt `n` is `initial_backoff + backoff_step * n`. The final attempt is
/// never followed by a sleep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries, including the first attempt
    pub max_attempts: u32,
    /// Backoff before the first retry
    pub initial_backoff: Duration,
    /// Additional backoff added for each subsequent retry
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(2),
            backoff_step: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(max_attempts: u32, initial_backoff: Duration, backoff_step: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
            backoff_step,
        }
    }

    /// Backoff to sleep after the given zero-based attempt index
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.initial_backoff + self.backoff_step * attempt
    }
}

/// Configuration for one sentiment pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Predict endpoint URL
    pub endpoint: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
    /// Retry behavior for rate-limited responses
    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a builder for API ergonomics
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SentimentError::invalid_config(
                "endpoint URL must not be empty",
            ));
        }

        Url::parse(&self.endpoint)?;

        if self.retry.max_attempts == 0 {
            return Err(SentimentError::invalid_config(
                "retry policy must allow at least one attempt",
            ));
        }

        if self.timeout.is_zero() {
            return Err(SentimentError::invalid_config(
                "per-attempt timeout must be non-zero",
            ));
        }

        Ok(())
    }
}

/// Builder for PipelineConfig to improve API ergonomics
pub struct PipelineConfigBuilder {
    endpoint: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl PipelineConfigBuilder {
    /// Create a new config builder with defaults
    pub fn new() -> Self {
        let defaults = PipelineConfig::default();
        Self {
            endpoint: defaults.endpoint,
            timeout: defaults.timeout,
            retry: defaults.retry,
        }
    }

    /// Set the predict endpoint URL
    #[must_use]
    pub fn endpoint<S: Into<String>>(mut self, url: S) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the per-attempt timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Set the total number of tries, including the first attempt
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.retry.max_attempts = attempts;
        self
    }

    /// Set the backoff schedule for rate-limited retries
    pub fn backoff(mut self, initial: Duration, step: Duration) -> Self {
        self.retry.initial_backoff = initial;
        self.retry.backoff_step = step;
        self
    }

    /// Replace the whole retry policy
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., empty or
    /// unparseable endpoint, zero attempts, zero timeout)
    pub fn build(self) -> Result<PipelineConfig> {
        let config = PipelineConfig {
            endpoint: self.endpoint,
            timeout: self.timeout,
            retry: self.retry,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
