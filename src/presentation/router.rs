use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{SpeechToText, TextGenerator, Transcoder};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_study_set_handler, download_artifact_handler, health_handler, status_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<T, S, G>(state: AppState<T, S, G>) -> Router
where
    T: Transcoder + 'static,
    S: SpeechToText + 'static,
    G: TextGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/status", get(status_handler::<T, S, G>))
        .route(
            "/api/v1/study-sets",
            post(create_study_set_handler::<T, S, G>),
        )
        .route("/api/v1/artifacts", post(download_artifact_handler))
        // No upload size limit.
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
