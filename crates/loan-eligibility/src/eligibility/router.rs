use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::domain::ApplicationForm;
use super::evaluation::EvaluationResult;
use super::service::{EligibilityService, EligibilityServiceError};

/// Envelope returned for a successful evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluated_at: DateTime<Utc>,
    pub result: EvaluationResult,
}

/// Router builder exposing HTTP endpoints for eligibility evaluation.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/evaluations", post(evaluate_handler))
        .route("/api/v1/eligibility/policy", get(policy_handler))
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(form): Json<ApplicationForm>,
) -> Response {
    match service.assess(&form) {
        Ok(result) => {
            let body = EvaluationResponse {
                evaluated_at: Utc::now(),
                result,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(EligibilityServiceError::Validation(errors)) => {
            let payload = json!({
                "error": "application failed validation",
                "errors": errors.messages(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn policy_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    (StatusCode::OK, Json(service.config().clone())).into_response()
}
