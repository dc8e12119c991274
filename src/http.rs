//! HTTP transport module for the strategy-coach service.
//!
//! Axum-based server exposing the coaching, validation, cascade-record,
//! and export endpoints behind a uniform JSON envelope:
//! `{"success": true, "data": ...}` or `{"success": false, "error": ...}`.
//! Health, info, and metrics are plain JSON.

use crate::cascade::{Cascade, CoachComment, StepId};
use crate::coach::CoachProvider;
use crate::config::Config;
use crate::error::Result;
use crate::export::render_document;
use crate::store::CascadeStore;
use crate::validate;
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{cmp::Ordering, sync::Arc};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub coach: Arc<dyn CoachProvider>,
    pub store: Arc<CascadeStore>,
    pub metrics: Arc<Mutex<HttpMetrics>>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        coach: Arc<dyn CoachProvider>,
        store: Arc<CascadeStore>,
    ) -> Self {
        Self {
            config,
            coach,
            store,
            metrics: Arc::new(Mutex::new(HttpMetrics::new())),
        }
    }
}

/// Metrics for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    pub total_requests: u64,
    pub last_request_unix: u64,
    pub errors_total: u64,
    pub latencies: Vec<f64>, // ring buffer for p95
}

impl HttpMetrics {
    fn new() -> Self {
        Self {
            total_requests: 0,
            last_request_unix: std::time::SystemTime::UNIX_EPOCH
                .elapsed()
                .unwrap_or_default()
                .as_secs(),
            errors_total: 0,
            latencies: Vec::with_capacity(256),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub step: String,
    #[serde(default)]
    pub cascade: Cascade,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub step: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCascadeRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCascadeRequest {
    pub name: Option<String>,
    pub cascade: Option<Cascade>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub name: Option<String>,
    pub cascade: Cascade,
    #[serde(default)]
    pub coach_comments: Vec<CoachComment>,
}

fn ok(data: impl Serialize) -> Json<serde_json::Value> {
    Json(json!({ "success": true, "data": data }))
}

fn owner_from(headers: &HeaderMap) -> String {
    headers
        .get("x-owner-id")
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Info endpoint
pub async fn info_handler(State(state): State<AppState>) -> impl IntoResponse {
    let coach = &state.config.coach;
    let steps: Vec<_> = StepId::ALL
        .iter()
        .map(|step| {
            json!({
                "key": step.key(),
                "title": step.title(),
                "minChars": coach.min_chars_for(*step),
            })
        })
        .collect();
    Json(json!({
        "server": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "bind": state.config.server.bind.to_string(),
        },
        "coach": {
            "maxChars": coach.max_chars,
            "simulateLatency": coach.simulate_latency,
            "steps": steps,
        }
    }))
}

/// Metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let metrics = state.metrics.lock().await.clone();

    let (avg_latency_ms, p95_latency_ms) = if metrics.latencies.is_empty() {
        (None, None)
    } else {
        let sum: f64 = metrics.latencies.iter().sum();
        let avg = sum / metrics.latencies.len() as f64;
        let mut sorted = metrics.latencies.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let p95_idx = (sorted.len() as f64 * 0.95) as usize;
        let p95 = sorted.get(p95_idx).copied();
        (Some(avg), p95)
    };

    Json(json!({
        "metrics_version": "1",
        "total_requests": metrics.total_requests,
        "last_request_unix": metrics.last_request_unix,
        "errors_total": metrics.errors_total,
        "avg_latency_ms": avg_latency_ms,
        "p95_latency_ms": p95_latency_ms,
    }))
}

/// Coaching feedback. Validation is the caller's job; this endpoint
/// will happily coach an empty answer.
pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<impl IntoResponse> {
    let step = StepId::parse(&req.step)?;
    let response = state.coach.feedback(step, &req.cascade).await?;
    Ok(ok(response))
}

/// Validation gate. Errors are data here, never an HTTP failure; only
/// an unrecognized step is rejected.
pub async fn validate_handler(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<impl IntoResponse> {
    let step = StepId::parse(&req.step)?;
    let coach = &state.config.coach;
    let report = validate::validate(
        step,
        &req.text,
        coach.min_chars_for(step),
        coach.max_chars,
    );
    Ok(ok(json!({
        "valid": report.is_valid(),
        "errors": report.errors,
    })))
}

pub async fn create_cascade_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: Option<Json<CreateCascadeRequest>>,
) -> Result<impl IntoResponse> {
    let name = req.and_then(|Json(r)| r.name);
    let record = state.store.create(&owner_from(&headers), name).await;
    Ok(ok(record))
}

pub async fn get_cascade_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let record = state.store.get(&owner_from(&headers), id).await?;
    Ok(ok(record))
}

pub async fn update_cascade_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCascadeRequest>,
) -> Result<impl IntoResponse> {
    let record = state
        .store
        .update(&owner_from(&headers), id, req.name, req.cascade)
        .await?;
    Ok(ok(record))
}

pub async fn delete_cascade_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.store.delete(&owner_from(&headers), id).await?;
    Ok(ok(json!({})))
}

pub async fn export_handler(Json(req): Json<ExportRequest>) -> impl IntoResponse {
    let name = req.name.as_deref().unwrap_or("Untitled Strategy");
    let doc = render_document(name, &req.cascade, &req.coach_comments);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"strategy-cascade.txt\"",
            ),
        ],
        doc,
    )
}

async fn track_metrics(
    State(metrics): State<Arc<Mutex<HttpMetrics>>>,
    req: axum::http::Request<Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let skip = req.uri().path() == "/health";
    let start = std::time::Instant::now();
    let resp = next.run(req).await;
    if !skip {
        let latency_ms = start.elapsed().as_millis() as f64;
        let mut m = metrics.lock().await;
        if latency_ms > 0.0 {
            m.latencies.push(latency_ms);
            if m.latencies.len() > 256 {
                m.latencies.remove(0);
            }
        }
        if !resp.status().is_success() {
            m.errors_total = m.errors_total.saturating_add(1);
        }
        m.total_requests = m.total_requests.saturating_add(1);
        m.last_request_unix = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
    }
    resp
}

async fn require_bearer(
    State(token): State<String>,
    req: axum::http::Request<Body>,
    next: middleware::Next,
) -> axum::response::Response {
    // Allow /health without auth
    if req.uri().path() == "/health" {
        return next.run(req).await;
    }
    let header_ok = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|v| v == format!("Bearer {}", token))
        .unwrap_or(false);
    if !header_ok {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "error": "unauthorized"})),
        )
            .into_response();
    }
    next.run(req).await
}

/// Build the application router. Split out from [`start_http_server`]
/// so tests can drive it without binding a socket.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .route("/metrics", get(metrics_handler))
        .route("/coach/feedback", post(feedback_handler))
        .route("/coach/validate", post(validate_handler))
        .route("/cascades", post(create_cascade_handler))
        .route(
            "/cascades/:id",
            get(get_cascade_handler)
                .patch(update_cascade_handler)
                .delete(delete_cascade_handler),
        )
        .route("/export", post(export_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_metrics,
        ));

    if let Some(token) = state.config.server.bearer_token.clone() {
        app = app.layer(middleware::from_fn_with_state(token, require_bearer));
    }

    app.with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    coach: Arc<dyn CoachProvider>,
    store: Arc<CascadeStore>,
) -> Result<()> {
    let state = AppState::new(config.clone(), coach, store);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting HTTP server on {}", config.server.bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
