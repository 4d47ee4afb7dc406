use crate::error::Result;
use crate::types::RawResponse;
use std::future::Future;

/// Trait for predict-endpoint transports
///
/// One call issues one POST of the given text and reports the raw status,
/// body, and attempt latency. Retry policy lives above this seam in
/// [`crate::pipeline::SentimentPipeline`]; implementations never retry.
pub trait PredictClient: Send + Sync + Clone {
    /// Execute a single predict request for the given text
    fn execute(&self, text: &str) -> impl Future<Output = Result<RawResponse>> + Send;
}
