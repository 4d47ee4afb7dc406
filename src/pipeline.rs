use crate::config::{PipelineConfig, RetryPolicy};
use crate::error::Result;
use crate::http::HttpPredictClient;
use crate::input::TweetInput;
use crate::interpret::{categorize_transport_error, interpret_ok_response};
use crate::traits::PredictClient;
use crate::types::{FailureKind, Outcome};
use log::{debug, warn};
use tokio::time::sleep;

/// Request pipeline for the sentiment-classification endpoint
///
/// One invocation validates the input, issues up to `max_attempts` tries
/// against the endpoint (retrying only on HTTP 429, with increasing backoff),
/// and folds every response or transport error into a single [`Outcome`].
/// Invocations are independent; the pipeline holds no mutable state.
pub struct SentimentPipeline<C: PredictClient> {
    client: C,
    retry: RetryPolicy,
}

impl SentimentPipeline<HttpPredictClient> {
    /// Create a pipeline backed by the real HTTP transport
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let client = HttpPredictClient::new(&config)?;
        Ok(Self {
            client,
            retry: config.retry,
        })
    }
}

impl<C: PredictClient> SentimentPipeline<C> {
    /// Create a pipeline over a custom transport
    pub fn with_client(client: C, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Classify raw user text, producing exactly one outcome
    ///
    /// # Errors
    /// Returns [`crate::error::SentimentError::EmptyInput`] before any
    /// network call when the text is empty after trimming. Every other
    /// condition is data, not an error: it arrives as a failure outcome.
    pub async fn classify(&self, text: &str) -> Result<Outcome> {
        let input = TweetInput::parse(text)?;
        Ok(self.classify_input(&input).await)
    }

    /// Classify an already validated input
    pub async fn classify_input(&self, input: &TweetInput) -> Outcome {
        let mut attempt: u32 = 0;

        loop {
            let raw = match self.client.execute(input.text()).await {
                Ok(raw) => raw,
                Err(error) => {
                    debug!("predict attempt {} failed: {}", attempt + 1, error);
                    return Outcome::failure(categorize_transport_error(&error));
                }
            };

            match raw.status {
                200 => return interpret_ok_response(&raw),
                429 => {
                    // Only rate limiting is retried; the last attempt is
                    // never followed by a sleep.
                    if attempt + 1 >= self.retry.max_attempts {
                        return Outcome::failure(FailureKind::RateLimited);
                    }
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "predict endpoint rate limited (attempt {} of {}), backing off for {:?}",
                        attempt + 1,
                        self.retry.max_attempts,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                status => {
                    return Outcome::failure(FailureKind::ServerError {
                        status,
                        body: raw.body,
                    })
                }
            }
        }
    }
}
