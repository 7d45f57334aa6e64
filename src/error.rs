use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every request either fully succeeds or fails with one of these.
/// Provider and filesystem failures all collapse into `Processing`;
/// the underlying error detail is logged server-side only.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No audio file uploaded.")]
    MissingAudio,
    #[error("Error processing audio.")]
    Processing(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::MissingAudio => StatusCode::BAD_REQUEST,
            RelayError::Processing(source) => {
                error!("Error processing audio: {:#}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
