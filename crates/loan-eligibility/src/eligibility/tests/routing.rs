use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::eligibility::domain::ApplicationForm;
use crate::eligibility::evaluation::PolicyKind;
use crate::eligibility::router::{eligibility_router, evaluate_handler};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn evaluate_handler_returns_result_envelope() {
    let service = Arc::new(service(PolicyKind::Gated));

    let response = evaluate_handler(State(service), Json(form())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["evaluated_at"].is_string());
    assert_eq!(body["result"]["decision"], "approved");
    assert_eq!(body["result"]["policy"], "gated");
    assert_eq!(body["result"]["approved_amount"], 4000.0);
    assert_eq!(body["result"]["interest_rate"], 15.0);
}

#[tokio::test]
async fn evaluate_handler_returns_unprocessable_for_invalid_form() {
    let service = Arc::new(service(PolicyKind::Gated));
    let form = ApplicationForm {
        age: 12,
        monthly_income: -10.0,
        ..form()
    };

    let response = evaluate_handler(State(service), Json(form)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let errors = body["errors"].as_array().expect("errors listed");
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn evaluation_route_accepts_json_payloads() {
    let router = eligibility_router(Arc::new(service(PolicyKind::Points)));

    let response = router
        .oneshot(
            Request::post("/api/v1/eligibility/evaluations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&form()).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"]["policy"], "points");
    assert_eq!(body["result"]["decision"], "conditional");
    assert!(body["result"]["components"].as_array().is_some());
}

#[tokio::test]
async fn evaluation_route_rejects_malformed_payloads() {
    let router = eligibility_router(Arc::new(service(PolicyKind::Gated)));

    let response = router
        .oneshot(
            Request::post("/api/v1/eligibility/evaluations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"age":"thirty"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn policy_route_reports_active_configuration() {
    let router = eligibility_router(Arc::new(service(PolicyKind::Gated)));

    let response = router
        .oneshot(
            Request::get("/api/v1/eligibility/policy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["policy"], "gated");
    assert_eq!(body["gated"]["minimum_credit_score"], 630);
    assert_eq!(body["points"]["approval_threshold"], 80);
}
