use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use medi_diabetes::{assess, ApiResponse, FormSubmission, Page};
use medi_risk_model::RiskModel;

use crate::error::ApiError;

/// Shared, read-only handle on the loaded model.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn RiskModel>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_api))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn index() -> Html<String> {
    Html(Page::default().render())
}

/// The button press. Invalid input sends the user back to the form.
pub async fn predict_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Response {
    let inputs = match submission.to_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            log::warn!("rejected submission: {e}");
            let page = Page::AwaitingInput {
                inputs: submission.salvage(),
                error: Some(e.to_string()),
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page.render())).into_response();
        }
    };
    match assess(state.model.as_ref(), &inputs) {
        Ok(assessment) => Html(Page::ResultDisplayed { assessment }.render()).into_response(),
        Err(e) => {
            log::error!("inference failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Risk model misconfigured</h1>".to_string()),
            )
                .into_response()
        }
    }
}

pub async fn predict_api(
    State(state): State<AppState>,
    body: Result<Json<FormSubmission>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(submission) = body?;
    let inputs = submission.to_inputs()?;
    let assessment = assess(state.model.as_ref(), &inputs)?;
    Ok(Json(ApiResponse::from(&assessment)))
}
