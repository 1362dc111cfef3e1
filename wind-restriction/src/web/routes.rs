//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::authority::IssueError;
use crate::rules::evaluate;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/evaluate", post(evaluate_train))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Evaluate the continuation rule and issue an authority when granted.
async fn evaluate_train(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let verdict = evaluate(
        &req.train,
        &req.current_zone,
        &req.zones_ahead,
        &req.current_block,
        &req.next_block,
    );
    let view = VerdictView::from_verdict(&verdict);
    let authority = verdict
        .into_grant()
        .map(|grant| state.authorities.issue(grant))
        .transpose()?;

    Ok(Json(EvaluateResponse {
        verdict: view,
        authority,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
}

impl From<IssueError> for AppError {
    fn from(e: IssueError) -> Self {
        AppError::Unavailable {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
