//! Router and request handlers.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::warn;

use regdesk_model::RegistrationRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of a successful submission response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    /// Id of the record created in the remote collection.
    pub page_id: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/submit", post(submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Accept one registration and create a record for it.
///
/// Fields that could not be placed in the remote collection are logged and
/// dropped; they never fail the request.
async fn submit(
    State(state): State<AppState>,
    Json(record): Json<RegistrationRecord>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Some(submitter) = state.submitter() else {
        return Err(ApiError::configuration());
    };

    let receipt = submitter.submit(&record).await?;
    if !receipt.dropped_fields.is_empty() {
        warn!(
            record_id = %receipt.record_id,
            dropped = ?receipt.dropped_fields,
            "submission succeeded with dropped fields"
        );
    }
    Ok(Json(SubmitResponse {
        success: true,
        message: "Registration submitted successfully!".to_string(),
        page_id: receipt.record_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_serializes_page_id_in_camel_case() {
        let response = SubmitResponse {
            success: true,
            message: "Registration submitted successfully!".to_string(),
            page_id: "record-1".to_string(),
        };
        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(json["pageId"], "record-1");
        assert_eq!(json["success"], true);
    }
}
