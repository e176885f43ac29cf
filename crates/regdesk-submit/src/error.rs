//! Error types for the submission pipeline.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Errors raised while reconciling a record against the remote store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// A required configuration value is absent.
    #[error("missing configuration: {variable} is not set")]
    MissingConfig { variable: &'static str },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// The store could not be reached or the connection broke mid-flight.
    #[error("network error talking to the store: {reason}")]
    Network { reason: String },

    /// The store answered with a non-success status.
    #[error("store rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The store answered 2xx but the body was not the expected shape.
    #[error("unexpected response from the store: {reason}")]
    UnexpectedResponse { reason: String },
}

impl SubmitError {
    /// Short message suitable for showing to an end user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::MissingConfig { .. } => "Server configuration error",
            SubmitError::ClientBuild { .. } | SubmitError::UnexpectedResponse { .. } => {
                "Failed to submit registration"
            }
            SubmitError::Network { .. } => "Could not reach the registration store",
            SubmitError::Remote { .. } => "The registration store rejected the submission",
        }
    }

    /// True for failures where retrying the same submission can succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitError::Network { .. } => true,
            SubmitError::Remote { status, .. } => *status >= 500 || *status == 429,
            SubmitError::MissingConfig { .. }
            | SubmitError::ClientBuild { .. }
            | SubmitError::UnexpectedResponse { .. } => false,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            SubmitError::ClientBuild {
                reason: err.to_string(),
            }
        } else if err.is_decode() {
            SubmitError::UnexpectedResponse {
                reason: err.to_string(),
            }
        } else {
            SubmitError::Network {
                reason: err.to_string(),
            }
        }
    }
}
