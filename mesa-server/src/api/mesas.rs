//! Mesa resource API handlers
//!
//! Every route here sits behind the bearer-token middleware; the verified
//! identity arrives as an `AuthUser` extension.

use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::Value;
use uuid::Uuid;

use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::mesa::{Mesa, MesaStats};

use crate::auth::token::AuthUser;
use crate::db;
use crate::state::AppState;
use crate::validation;

use super::{ApiResult, internal};

/// GET /api/mesas: all mesas ordered by number
pub async fn list_mesas(State(state): State<AppState>) -> ApiResult<Vec<Mesa>> {
    let mesas = db::mesas::list(&state.pool).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(mesas)))
}

/// GET /api/mesas/stats: aggregate statistics
pub async fn mesa_stats(State(state): State<AppState>) -> ApiResult<MesaStats> {
    let stats = db::mesas::stats(&state.pool).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(stats)))
}

/// GET /api/mesas/{id}
pub async fn get_mesa(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Mesa> {
    let id = parse_id(&id)?;
    let mesa = db::mesas::find_by_id(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::MesaNotFound))?;
    Ok(Json(ApiResponse::success(mesa)))
}

/// POST /api/mesas: create after schema validation
pub async fn create_mesa(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ApiResponse<Mesa>>), AppError> {
    let data = validation::parse_mesa_create(&body)?;

    let id = Uuid::new_v4();
    let now = chrono::Utc::now();
    let mesa = match db::mesas::create(&state.pool, id, &data, now).await {
        Ok(mesa) => mesa,
        Err(e) if db::is_unique_violation(&e) => {
            return Err(AppError::new(ErrorCode::MesaNumberTaken));
        }
        Err(e) => return Err(internal(e)),
    };

    tracing::info!(
        mesa_id = %mesa.id,
        numero = mesa.numero_mesa,
        user = %auth.email,
        "Mesa created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(mesa))))
}

/// PATCH /api/mesas/{id}: partial update; the timestamp refreshes only
/// when at least one field is supplied
pub async fn update_mesa(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Mesa> {
    let id = parse_id(&id)?;
    let data = validation::parse_mesa_update(&body)?;

    // An empty payload leaves the record, timestamp included, untouched
    if data.is_empty() {
        let mesa = db::mesas::find_by_id(&state.pool, id)
            .await
            .map_err(internal)?
            .ok_or_else(|| AppError::new(ErrorCode::MesaNotFound))?;
        return Ok(Json(ApiResponse::success(mesa)));
    }

    let now = chrono::Utc::now();
    let mesa = match db::mesas::update(&state.pool, id, &data, now).await {
        Ok(Some(mesa)) => mesa,
        Ok(None) => return Err(AppError::new(ErrorCode::MesaNotFound)),
        Err(e) if db::is_unique_violation(&e) => {
            return Err(AppError::new(ErrorCode::MesaNumberTaken));
        }
        Err(e) => return Err(internal(e)),
    };

    tracing::info!(mesa_id = %mesa.id, user = %auth.email, "Mesa updated");

    Ok(Json(ApiResponse::success(mesa)))
}

/// DELETE /api/mesas/{id}: returns the deleted record
pub async fn delete_mesa(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Mesa> {
    let id = parse_id(&id)?;
    let mesa = db::mesas::delete(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::MesaNotFound))?;

    tracing::info!(mesa_id = %mesa.id, user = %auth.email, "Mesa deleted");

    Ok(Json(ApiResponse::success(mesa)))
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid("Invalid mesa id"))
}
