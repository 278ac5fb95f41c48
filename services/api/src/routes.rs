use crate::infra::AppState;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use placement_copilot::error::AppError;
use placement_copilot::evaluation::{evaluation_router, CandidateEvaluator};
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const INDEX_FILE: &str = "index.html";

pub(crate) fn with_application_routes(evaluator: Arc<CandidateEvaluator>) -> Router {
    evaluation_router(evaluator)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(ui_fallback)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

/// Serves the web UI for every route the API does not claim.
///
/// Unknown files fall back to `index.html` so client-side routing keeps working.
pub(crate) async fn ui_fallback(
    Extension(state): Extension<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = uri.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return Ok(not_found("API endpoint not found"));
    }

    let Some(bundle) = state.ui_bundle.as_deref() else {
        return Ok(not_found("Route not found"));
    };

    let Some(asset) = resolve_asset(bundle, path) else {
        return Ok(not_found("Route not found"));
    };

    debug!(asset = %asset.display(), "serving ui asset");
    let body = tokio::fs::read(&asset).await?;
    let mime = mime_guess::from_path(&asset).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], body).into_response())
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

/// Maps a request path onto a file inside the bundle, refusing anything that escapes it.
fn resolve_asset(bundle: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path);
    let contained = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    if contained && !request_path.is_empty() {
        let candidate = bundle.join(relative);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let index = bundle.join(INDEX_FILE);
    index.is_file().then_some(index)
}
