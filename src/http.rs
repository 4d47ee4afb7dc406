use crate::config::PipelineConfig;
use crate::error::Result;
use crate::traits::PredictClient;
use crate::types::{PredictRequest, RawResponse};
use log::debug;
use reqwest::{Client, Response};
use std::time::Instant;

/// Reqwest-backed predict transport
///
/// Built once per pipeline with the configured per-attempt timeout; cloning
/// shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpPredictClient {
    client: Client,
    endpoint: String,
}

impl HttpPredictClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Convert a reqwest Response into our RawResponse
    ///
    /// Latency is taken after the body is read, so it covers the full
    /// exchange for this attempt.
    async fn convert_response(response: Response, started: Instant) -> Result<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse::new(status, body, started.elapsed()))
    }
}

impl PredictClient for HttpPredictClient {
    async fn execute(&self, text: &str) -> Result<RawResponse> {
        let payload = PredictRequest::new(text);

        debug!("dispatching predict call to {}", self.endpoint);
        let started = Instant::now();

        // .json() serializes the body and sets Content-Type: application/json
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&payload)
            .send()
            .await?;

        Self::convert_response(response, started).await
    }
}
