//! Router and request handlers for the processing endpoint
//!
//! Thin transport shell: JSON body in, flat feature map out. All
//! numerical work happens in physio-processing; this layer only moves
//! bytes and returns client errors for unparseable payloads.

use axum::{
    routing::{get, post},
    Json, Router,
};
use physio_processing::{process, FeatureMap, ProcessRequest};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
pub fn router() -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// POST /process: run the cleaning/feature pipeline on one batch.
///
/// A body that is not valid JSON for the request shape is rejected by
/// the extractor with a client error before the pipeline runs.
async fn process_handler(Json(request): Json<ProcessRequest>) -> Json<FeatureMap> {
    let features = process(request);
    info!(features = features.len(), "request processed");
    Json(features)
}

/// GET /health: liveness probe
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
