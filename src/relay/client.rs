//! HTTP client for the third-party form relay
//!
//! Submissions go out as a single multipart POST. The relay answers with
//! JSON; anything else is treated as a failure.

use super::error::{RelayError, GENERIC_FAILURE};
use super::traits::RelayClientTrait;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;

/// Error shape the relay uses for rejected submissions
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

/// Client for the form relay endpoint
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClientTrait for RelayClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), RelayError> {
        let form = payload
            .form_fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            });

        tracing::info!(
            submission = %payload.id,
            endpoint = %self.endpoint,
            "sending contact submission"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

/// Decide whether a relay response means the submission was accepted
pub fn interpret_response(status: StatusCode, body: &str) -> Result<(), RelayError> {
    if status.is_success() {
        return serde_json::from_str::<serde_json::Value>(body)
            .map(|_| ())
            .map_err(|e| RelayError::MalformedBody(e.to_string()));
    }

    let message = serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());

    Err(RelayError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_ok_with_json_body() {
        assert_ok!(interpret_response(StatusCode::OK, r#"{"ok":true}"#));
    }

    #[test]
    fn test_ok_with_html_body_is_malformed() {
        let err = assert_err!(interpret_response(StatusCode::OK, "<html></html>"));
        assert!(matches!(err, RelayError::MalformedBody(_)));
    }

    #[test]
    fn test_ok_with_empty_body_is_malformed() {
        let err = assert_err!(interpret_response(StatusCode::OK, ""));
        assert!(matches!(err, RelayError::MalformedBody(_)));
    }

    #[test]
    fn test_rejected_uses_error_field() {
        let err = assert_err!(interpret_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error":"bad request"}"#
        ));
        match err {
            RelayError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_without_json_falls_back() {
        let err = assert_err!(interpret_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream exploded"
        ));
        match err {
            RelayError::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, GENERIC_FAILURE);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_json_without_error_field_falls_back() {
        let err = assert_err!(interpret_response(
            StatusCode::BAD_REQUEST,
            r#"{"errors":[]}"#
        ));
        assert!(matches!(
            err,
            RelayError::Rejected { message, .. } if message == GENERIC_FAILURE
        ));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = RelayClient::new("https://relay.example/f/abc");
        assert_eq!(client.endpoint(), "https://relay.example/f/abc");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 on localhost is not expected to accept connections
        let client = RelayClient::new("http://127.0.0.1:9/f/none");
        let payload = SubmissionPayload::new(
            "Jane",
            "Rider",
            "jane@example.com",
            "",
            "",
            "Please call me back",
            chrono::Local::now(),
        );
        let err = assert_err!(client.send(&payload).await);
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
