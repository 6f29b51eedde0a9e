//! HTTP API
//!
//! Routes, shared state and error mapping for the REST surface.

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer};

use crate::middleware::logging::with_request_tracing;
use crate::services::storage::UPLOADS_PREFIX;

/// Headroom for the text fields sent alongside an image
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Requests running longer than `timeout` are answered with 408
fn request_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.settings.uploads.max_file_size_bytes + FORM_OVERHEAD_BYTES;
    let timeout = Duration::from_secs(state.settings.server.request_timeout_seconds);
    let uploads = ServeDir::new(state.services.image_store.directory());

    let api = Router::new()
        .route(
            "/events",
            get(handlers::events::list_events).post(handlers::events::create_event),
        )
        .route("/events/:id", get(handlers::events::get_event))
        .route("/events/:id/signup", post(handlers::participants::sign_up))
        .route("/users/register", post(handlers::users::register))
        .route("/users/login", post(handlers::users::login));

    let router = Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health::health))
        .nest_service(UPLOADS_PREFIX, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(request_timeout(timeout))
        .layer(CorsLayer::permissive())
        .with_state(state);

    with_request_tracing(router)
}
