//! Transport adapter around the decision engine: request binding,
//! validation, and status mapping. The engine output is serialized to the
//! wire unchanged.

use crate::engine::{self, EligibilityRequest, EligibilityResponse};
use crate::error::AppError;
use crate::legacy::{self, BenefitsResponse};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: PrometheusHandle,
}

/// Builds the stub's router. The prometheus layer is applied by the caller
/// so tests can drive the router without installing a global recorder.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        // The upstream DWP API takes GET with a JSON body; the stub keeps
        // that quirk so clients exercise their real wiring.
        .route("/v2/dwp/benefits", get(identity_and_eligibility_endpoint))
        .route("/v1/dwp/benefits", post(legacy_benefits_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn identity_and_eligibility_endpoint(
    Json(request): Json<EligibilityRequest>,
) -> Result<Json<EligibilityResponse>, AppError> {
    request.person.validate()?;
    debug!(nino = %request.person.nino, "evaluating identity and eligibility scenario");

    let today = Local::now().date_naive();
    let response = engine::evaluate_eligibility(&request, today)?;

    debug!(
        identity = response.identity_status.label(),
        eligibility = response.eligibility_status.label(),
        "scenario resolved"
    );
    Ok(Json(response))
}

async fn legacy_benefits_endpoint(
    Json(request): Json<EligibilityRequest>,
) -> Result<Json<BenefitsResponse>, AppError> {
    request.person.validate_legacy()?;
    debug!(nino = %request.person.nino, "evaluating legacy benefits scenario");

    let response = legacy::evaluate_benefits(&request.person.nino)?;
    Ok(Json(response))
}
