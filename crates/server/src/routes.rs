use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::document_service::DocumentService;

pub mod jsons;

pub async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}

/// Build the full application router: versioned document routes plus liveness.
pub fn build_router(service: DocumentService, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/v1/jsons", post(jsons::store))
        .route("/api/v1/jsons/:id", get(jsons::get))
        .route("/api/v1/health", get(health));

    api.with_state(service).layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
