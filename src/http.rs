//! HTTP surface: the score endpoints plus the operational
//! health/readiness/metrics routes.

use crate::error::AppError;
use crate::scoring::rules::{self, RuleOutcome};
use crate::scoring::{RankedScore, RawScore, ScaledScore, ScoreInput};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) data: ScoreInput,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProcessedScoreResponse {
    pub(crate) data: ProcessedScore,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProcessedScore {
    pub(crate) raw: RawScore,
    pub(crate) scaled: ScaledScore,
    pub(crate) ranked: RankedScore,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluatedScoreResponse {
    pub(crate) results: Vec<RuleOutcome>,
}

/// Build the service router. The score endpoints are stateless; `/ready` and
/// `/metrics` expect an `Extension<AppState>` layer from the server wiring.
pub fn score_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/scores/process", post(process_scores_endpoint))
        .route("/scores/rules-evaluator/check", post(check_rules_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    // Pairs with the Release store performed once the listener is bound.
    let ready = state.readiness.load(Ordering::Acquire);
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

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scale and rank a score. Rejects an all-zero score with 400 before any
/// scaling happens; everything else is total.
pub(crate) async fn process_scores_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ProcessedScoreResponse>, AppError> {
    let raw = RawScore::new(&payload.data);
    let scaled = raw.scale()?;
    let ranked = scaled.rank();

    Ok(Json(ProcessedScoreResponse {
        data: ProcessedScore {
            raw,
            scaled,
            ranked,
        },
    }))
}

/// Run the diagnostic rules. No zero-rejection here: both rules read only raw
/// values and never scale, so an all-zero score is a valid input.
pub(crate) async fn check_rules_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Json<EvaluatedScoreResponse> {
    let raw = RawScore::new(&payload.data);
    Json(EvaluatedScoreResponse {
        results: rules::evaluate(&raw),
    })
}
