use crate::error::{Result, SentimentError};
use crate::traits::PredictClient;
use crate::types::RawResponse;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted transport reply
enum ScriptedReply {
    Response(RawResponse),
    Error(SentimentError),
}

/// Mock predict transport for pipeline tests
///
/// Replies are scripted in order, one per call; clones share the script and
/// the call counter, so a test can keep a handle for assertions while the
/// pipeline owns another.
#[derive(Clone)]
pub struct MockPredictClient {
    script: Arc<Mutex<VecDeque<ScriptedReply>>>,
    calls: Arc<AtomicUsize>,
}

impl MockPredictClient {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script a raw response for the next unscripted call
    pub fn with_response(self, response: RawResponse) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Response(response));
        self
    }

    /// Script a transport error for the next unscripted call
    pub fn with_error(self, error: SentimentError) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Error(error));
        self
    }

    /// Number of calls the mock has served
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPredictClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictClient for MockPredictClient {
    async fn execute(&self, _text: &str) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(ScriptedReply::Response(response)) => Ok(response),
            Some(ScriptedReply::Error(error)) => Err(error),
            None => Err(SentimentError::general("mock script exhausted")),
        }
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;

    /// Build a raw response with a canned attempt latency
    pub fn raw_response(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, body.to_string(), Duration::from_millis(42))
    }

    /// Well-formed predict payload carrying a single class index
    pub fn prediction_body(class: i64) -> String {
        format!(r#"{{"prediction": [{}]}}"#, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_script_in_order() {
        tokio_test::block_on(async {
            let client = MockPredictClient::new()
                .with_response(test_helpers::raw_response(429, ""))
                .with_response(
                    test_helpers::raw_response(200, &test_helpers::prediction_body(2)),
                );

            assert_eq!(client.execute("x").await.unwrap().status, 429);
            assert_eq!(client.execute("x").await.unwrap().status, 200);
            assert_eq!(client.calls(), 2);
        });
    }

    #[test]
    fn test_mock_errors_when_script_runs_out() {
        tokio_test::block_on(async {
            let client = MockPredictClient::new();
            let result = client.execute("x").await;
            assert!(matches!(result, Err(SentimentError::General { .. })));
        });
    }

    #[test]
    fn test_clones_share_script_and_counter() {
        tokio_test::block_on(async {
            let client = MockPredictClient::new().with_response(
                test_helpers::raw_response(200, &test_helpers::prediction_body(0)),
            );
            let clone = client.clone();

            assert!(clone.execute("x").await.is_ok());
            assert_eq!(client.calls(), 1);
            assert!(client.execute("x").await.is_err());
        });
    }
}
