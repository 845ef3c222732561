use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::{self, AppState};
use crate::errors;

pub mod admin;
pub mod clients;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: API routes plus a static-file
/// fallback rooted at `static_dir` (the demo serves its frontend from the
/// working directory).
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    let static_assets = ServeDir::new(static_dir);

    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(auth::login))
        .route("/api/subscribe", post(clients::subscribe))
        .route("/api/dashboard/:id", get(clients::dashboard))
        .route("/api/clients/:id/service", post(clients::toggle_service))
        .route("/api/admin/clients", get(admin::list_clients))
        .route("/api/admin/clients/:id/:action", post(admin::set_client_status))
        .fallback_service(static_assets)
        .with_state(state)
        .layer(cors)
        .layer(
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
        .layer(CatchPanicLayer::custom(errors::handle_panic))
}
