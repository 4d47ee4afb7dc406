use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Sentiment label assigned by the classification endpoint
///
/// The endpoint encodes labels as class indices; anything outside the known
/// set maps to [`Sentiment::Unknown`] rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Neutral,
    Negative,
    Positive,
    Unknown,
}

impl Sentiment {
    /// Map a raw class index to its label (0 neutral, 1 negative, 2 positive)
    pub fn from_class(class: i64) -> Self {
        match class {
            0 => Sentiment::Neutral,
            1 => Sentiment::Negative,
            2 => Sentiment::Positive,
            _ => Sentiment::Unknown,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Positive => "Positive",
            Sentiment::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Failure categories a pipeline invocation can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The endpoint kept answering 429 after every allowed attempt
    RateLimited,
    /// Terminal non-200 status with the response body surfaced as-is
    ServerError { status: u16, body: String },
    /// An attempt exceeded the per-attempt timeout
    Timeout,
    /// The connection to the endpoint could not be established
    ConnectionFailed,
    /// A 200 response whose payload violated the prediction contract
    MalformedResponse,
    /// Anything else, carrying the underlying error's description
    Unexpected { message: String },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::RateLimited => {
                write!(f, "The API is rate limiting requests; try again shortly")
            }
            FailureKind::ServerError { status, body } => {
                write!(f, "The API returned an error (status {}): {}", status, body)
            }
            FailureKind::Timeout => write!(f, "The API took too long to respond"),
            FailureKind::ConnectionFailed => {
                write!(f, "Could not connect to the API; it may be offline")
            }
            FailureKind::MalformedResponse => {
                write!(f, "The API response did not contain a prediction")
            }
            FailureKind::Unexpected { message } => write!(f, "Unexpected error: {}", message),
        }
    }
}

/// Normalized result of one pipeline invocation
///
/// Latency covers only the attempt that produced the response, never backoff
/// sleeps or earlier attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success { label: Sentiment, latency: Duration },
    Failure { kind: FailureKind },
}

impl Outcome {
    /// Create a successful outcome
    pub fn success(label: Sentiment, latency: Duration) -> Self {
        Outcome::Success { label, latency }
    }

    /// Create a failed outcome
    pub fn failure(kind: FailureKind) -> Self {
        Outcome::Failure { kind }
    }

    /// Check if the outcome carries a label
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Check if the outcome is a categorized failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Label of a successful outcome
    pub fn label(&self) -> Option<Sentiment> {
        match self {
            Outcome::Success { label, .. } => Some(*label),
            Outcome::Failure { .. } => None,
        }
    }

    /// Latency of the final attempt in seconds, for direct rendering
    pub fn latency_seconds(&self) -> Option<f64> {
        match self {
            Outcome::Success { latency, .. } => Some(latency.as_secs_f64()),
            Outcome::Failure { .. } => None,
        }
    }

    /// Failure category of a failed outcome
    pub fn failure_kind(&self) -> Option<&FailureKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { kind } => Some(kind),
        }
    }
}

/// Raw transport-level response for a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Wall-clock duration of this attempt, measured around the full
    /// request/response exchange
    pub latency: Duration,
}

impl RawResponse {
    /// Create a new raw response
    pub fn new(status: u16, body: String, latency: Duration) -> Self {
        Self {
            status,
            body,
            latency,
        }
    }
}

/// JSON body posted to the predict endpoint: `{"input": [<text>]}`
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub input: Vec<String>,
}

impl PredictRequest {
    /// Wrap a single tweet in the endpoint's batch shape
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            input: vec![text.into()],
        }
    }
}

/// JSON payload the predict endpoint answers with on 200
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    /// Class indices, one per input element; only the first is consumed
    #[serde(default)]
    pub prediction: Vec<Option<i64>>,
}

impl PredictResponse {
    /// First class index, if present and non-null
    pub fn first_class(&self) -> Option<i64> {
        self.prediction.first().copied().flatten()
    }
}
