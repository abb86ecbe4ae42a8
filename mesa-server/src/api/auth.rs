//! Authentication API handlers
//!
//! POST /api/auth/register: create a user account
//! POST /api/auth/login: verify credentials, issue a bearer token

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use shared::error::{AppError, ErrorCode};

use crate::auth::token::create_token;
use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

/// Display name applied when registration omits one
const DEFAULT_USERNAME: &str = "Invitado";

// ── Request types ──

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ── POST /api/auth/register ──

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::validation("email and password are required"));
    };
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("email and password are required"));
    }

    let username = req.username.unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let hashed_password = hash_password(&password).map_err(|e| {
        tracing::error!("Password hash error: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    let id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now();

    // The unique index on users.email is the single uniqueness authority;
    // a concurrent duplicate surfaces here as a constraint violation.
    match db::users::create(&state.pool, id, &username, &email, &hashed_password, now).await {
        Ok(()) => {}
        Err(e) if db::is_unique_violation(&e) => {
            return Err(AppError::new(ErrorCode::EmailTaken));
        }
        Err(e) => return Err(super::internal(e)),
    }

    tracing::info!(user_id = %id, email = %email, "User registered");

    // Only the non-secret fields go back to the client
    Ok((
        StatusCode::CREATED,
        Json(json!({ "username": username, "email": email })),
    ))
}

// ── POST /api/auth/login ──

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(AppError::validation("email and password are required"));
    };
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("email and password are required"));
    }

    let user = db::users::find_by_email(&state.pool, &email)
        .await
        .map_err(super::internal)?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidCredentials, "No account with that email")
        })?;

    if !verify_password(&password, &user.hashed_password) {
        return Err(AppError::with_message(
            ErrorCode::InvalidCredentials,
            "Incorrect password",
        ));
    }

    let token = create_token(
        &user.id.to_string(),
        &user.username,
        &user.email,
        &state.jwt_secret,
        state.token_expiry_hours,
    )
    .map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(json!({ "token": token })))
}
