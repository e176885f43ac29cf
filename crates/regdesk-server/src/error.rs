//! Error responses for the HTTP surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use regdesk_submit::SubmitError;

/// A failed request, rendered as `{error, details?}` with a 5xx status.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    /// Credentials or collection id are missing on the server side. The
    /// body deliberately says nothing about which variable is absent.
    #[must_use]
    pub fn configuration() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Server configuration error".to_string(),
            details: None,
        }
    }

    #[must_use]
    pub fn submission(details: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Failed to submit registration".to_string(),
            details: Some(details),
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::MissingConfig { .. } => ApiError::configuration(),
            other => ApiError::submission(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_has_no_details() {
        let json = serde_json::to_value(ApiError::configuration()).expect("json");
        assert_eq!(json, serde_json::json!({"error": "Server configuration error"}));
    }

    #[test]
    fn remote_errors_surface_their_detail() {
        let err = SubmitError::Remote {
            status: 400,
            message: "body failed validation".to_string(),
        };
        let json = serde_json::to_value(ApiError::from(err)).expect("json");
        assert_eq!(json["error"], "Failed to submit registration");
        assert_eq!(
            json["details"],
            "store rejected the request (400): body failed validation"
        );
    }
}
