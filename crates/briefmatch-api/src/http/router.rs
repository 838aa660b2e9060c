//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/` except `/health`.
//! Middleware: CORS (permissive), request tracing.

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use briefmatch_core::embedding::embedder::Embedder;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/briefs", post(handlers::briefs::submit_brief))
        .route("/briefs/{id}", get(handlers::briefs::get_brief))
        .route("/matches", post(handlers::matches::preview_matches))
        .route(
            "/feedback",
            post(handlers::feedback::submit_feedback).get(handlers::feedback::list_feedback),
        )
        .route(
            "/talents",
            get(handlers::talents::list_talents).post(handlers::talents::create_talent),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness plus the active embedding model.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "embedding_model": state.match_service.embedder().model_name(),
    }))
}
