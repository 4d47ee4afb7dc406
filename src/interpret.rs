//! Pure logic for turning raw responses and transport errors into outcomes
//! No transport or presentation concerns - returns structured data only

use crate::error::SentimentError;
use crate::types::{FailureKind, Outcome, PredictResponse, RawResponse, Sentiment};
use log::debug;

/// Interpret a 200 response into an outcome
///
/// A payload that is missing the `prediction` field, carries an empty array,
/// or whose first element is null violates the contract and becomes a
/// malformed-response failure; an out-of-range class index is still a
/// success, labeled unknown.
pub fn interpret_ok_response(raw: &RawResponse) -> Outcome {
    match parse_first_class(&raw.body) {
        Some(class) => {
            let label = Sentiment::from_class(class);
            if label == Sentiment::Unknown {
                debug!("predict endpoint answered with unrecognized class {}", class);
            }
            Outcome::success(label, raw.latency)
        }
        None => {
            debug!(
                "predict payload missing or malformed: {}",
                truncate_body(&raw.body, 150)
            );
            Outcome::failure(FailureKind::MalformedResponse)
        }
    }
}

/// Categorize a transport-level error into a failure kind
///
/// Timeouts and connection-establishment failures get their own categories;
/// everything else keeps the underlying description.
pub fn categorize_transport_error(error: &SentimentError) -> FailureKind {
    match error {
        SentimentError::Http(e) if e.is_timeout() => FailureKind::Timeout,
        SentimentError::Http(e) if e.is_connect() => FailureKind::ConnectionFailed,
        other => FailureKind::Unexpected {
            message: other.to_string(),
        },
    }
}

/// Extract the first prediction class from a response body, if the payload
/// honors the contract
fn parse_first_class(body: &str) -> Option<i64> {
    serde_json::from_str::<PredictResponse>(body)
        .ok()?
        .first_class()
}

/// Truncate a response body for logging
fn truncate_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let head: String = body.chars().take(max_chars).collect();
        format!("{}... (truncated)", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ok_response(body: &str) -> RawResponse {
        RawResponse::new(200, body.to_string(), Duration::from_millis(120))
    }

    #[test]
    fn test_known_classes_map_to_labels() {
        let cases = vec![
            (r#"{"prediction": [0]}"#, Sentiment::Neutral),
            (r#"{"prediction": [1]}"#, Sentiment::Negative),
            (r#"{"prediction": [2]}"#, Sentiment::Positive),
        ];

        for (body, expected) in cases {
            let outcome = interpret_ok_response(&ok_response(body));
            assert_eq!(outcome.label(), Some(expected), "body: {}", body);
        }
    }

    #[test]
    fn test_unknown_class_is_success_not_failure() {
        let outcome = interpret_ok_response(&ok_response(r#"{"prediction": [7]}"#));
        assert!(outcome.is_success());
        assert_eq!(outcome.label(), Some(Sentiment::Unknown));
    }

    #[test]
    fn test_only_first_prediction_is_consumed() {
        let outcome = interpret_ok_response(&ok_response(r#"{"prediction": [1, 2, 0]}"#));
        assert_eq!(outcome.label(), Some(Sentiment::Negative));
    }

    #[test]
    fn test_latency_is_carried_through() {
        let outcome = interpret_ok_response(&ok_response(r#"{"prediction": [2]}"#));
        assert_eq!(outcome.latency_seconds(), Some(0.12));
    }

    #[test]
    fn test_contract_violations_are_malformed() {
        let bodies = vec![
            r#"{"prediction": []}"#,
            r#"{"verdict": [2]}"#,
            r#"{"prediction": [null]}"#,
            r#"{"prediction": "positive"}"#,
            "not json at all",
            "",
        ];

        for body in bodies {
            let outcome = interpret_ok_response(&ok_response(body));
            assert_eq!(
                outcome.failure_kind(),
                Some(&FailureKind::MalformedResponse),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_non_http_errors_categorize_as_unexpected() {
        let error = SentimentError::general("socket closed mid-read");
        let kind = categorize_transport_error(&error);
        assert_eq!(
            kind,
            FailureKind::Unexpected {
                message: "General error: socket closed mid-read".to_string()
            }
        );
    }

    #[test]
    fn test_truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short", 150), "short");
        assert!(truncate_body(&"x".repeat(200), 150).ends_with("... (truncated)"));
    }
}
