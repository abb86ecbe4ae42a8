//! API routes for mesa-server

pub mod auth;
pub mod health;
pub mod mesas;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde_json::json;

use shared::error::{ApiResponse, AppError, ErrorCode};

use crate::auth::token::token_auth_middleware;
use crate::state::AppState;

/// Handler result: enveloped payload or an AppError translated by axum
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Log the underlying cause and hide it behind a generic 500
fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Database error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    use tower_http::{cors::CorsLayer, trace::TraceLayer};

    // Public authentication (no token required)
    let public = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    // Mesa resource (token required)
    let protected = Router::new()
        .route("/api/mesas", get(mesas::list_mesas).post(mesas::create_mesa))
        .route("/api/mesas/stats", get(mesas::mesa_stats))
        .route(
            "/api/mesas/{id}",
            get(mesas::get_mesa)
                .patch(mesas::update_mesa)
                .delete(mesas::delete_mesa),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            token_auth_middleware,
        ));

    Router::new()
        .route("/api", get(health::health_check))
        .merge(public)
        .merge(protected)
        .fallback(unknown_resource)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unmatched routes (body preserved from the original API)
async fn unknown_resource() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "No existe el recurso" })),
    )
}
