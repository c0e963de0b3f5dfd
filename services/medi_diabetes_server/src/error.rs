use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medi_diabetes::InputError;
use medi_risk_model::ModelError;
use serde_json::json;

/// Failures of `/api/predict`, answered as JSON.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not JSON, or a field had the wrong JSON type.
    Body(JsonRejection),
    Input(InputError),
    Inference(ModelError),
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Body(e)
    }
}

impl From<InputError> for ApiError {
    fn from(e: InputError) -> Self {
        ApiError::Input(e)
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        ApiError::Inference(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Body(e) => {
                log::warn!("rejected request body: {e}");
                (e.status(), e.body_text())
            }
            ApiError::Input(e) => {
                log::warn!("rejected submission: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Inference(e) => {
                log::error!("inference failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "risk model misconfigured".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
