//! Submission helper wrapping the registration endpoint.
//!
//! The wizard only sees [`SubmitRegistration`]; the HTTP-backed
//! [`FormEndpointClient`] is one implementation. The helper never panics and
//! never lets a transport error escape its boundary: every failure becomes a
//! `SubmitOutcome` with `success == false`.

use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use regdesk_model::RegistrationRecord;

/// What the wizard learns about a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    /// User-facing status message.
    pub message: String,
    /// Diagnostic detail for failed attempts.
    pub error: Option<String>,
}

impl SubmitOutcome {
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// The wizard's submission collaborator.
pub trait SubmitRegistration {
    fn submit(&self, record: &RegistrationRecord) -> SubmitOutcome;
}

/// Errors internal to the endpoint helper.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Endpoint(String),
}

#[derive(Debug, Deserialize)]
struct EndpointSuccess {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EndpointFailure {
    error: Option<String>,
    details: Option<String>,
}

const DEFAULT_SUCCESS_MESSAGE: &str = "Registration submitted successfully!";
const FAILURE_MESSAGE: &str = "Failed to submit registration";

/// Blocking client for the `POST /api/submit` endpoint.
#[derive(Debug, Clone)]
pub struct FormEndpointClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl FormEndpointClient {
    /// `endpoint` is the full submit URL, e.g.
    /// `https://register.example.org/api/submit`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    fn post(&self, record: &RegistrationRecord) -> Result<SubmitOutcome, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let failure: EndpointFailure = response.json().unwrap_or(EndpointFailure {
                error: None,
                details: None,
            });
            let detail = failure
                .details
                .or(failure.error)
                .unwrap_or_else(|| format!("endpoint returned {status}"));
            return Err(ClientError::Endpoint(detail));
        }

        let success: EndpointSuccess = response
            .json()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(SubmitOutcome {
            success: true,
            message: success
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            error: None,
        })
    }
}

impl SubmitRegistration for FormEndpointClient {
    fn submit(&self, record: &RegistrationRecord) -> SubmitOutcome {
        match self.post(record) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "registration submission failed");
                SubmitOutcome::failure(FAILURE_MESSAGE, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_outcome_carries_detail() {
        let outcome = SubmitOutcome::failure(FAILURE_MESSAGE, "collection is gone");
        assert!(!outcome.success);
        assert_eq!(outcome.message, FAILURE_MESSAGE);
        assert_eq!(outcome.error.as_deref(), Some("collection is gone"));
    }

    #[test]
    fn endpoint_failure_body_parses() {
        let failure: EndpointFailure =
            serde_json::from_str(r#"{"error":"Failed to submit registration","details":"boom"}"#)
                .expect("parse failure body");
        assert_eq!(failure.details.as_deref(), Some("boom"));
        assert_eq!(failure.error.as_deref(), Some("Failed to submit registration"));
    }

    #[test]
    fn unreachable_endpoint_becomes_a_failure_outcome() {
        let client =
            FormEndpointClient::new("http://127.0.0.1:9/api/submit").expect("build client");
        let outcome = client.submit(&RegistrationRecord::default());
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
    }
}
