//! Bearer-token authentication for the mesa API
//!
//! Issues HS256 tokens on login and verifies them in front of every
//! protected route. The verified identity is attached to the request
//! extensions so handlers can use it.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// JWT claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    /// User ID
    pub sub: String,
    /// Display name
    pub username: String,
    /// Account email
    pub email: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated user identity extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl From<UserClaims> for AuthUser {
    fn from(claims: UserClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
        }
    }
}

/// Create a signed token for a user
pub fn create_token(
    user_id: &str,
    username: &str,
    email: &str,
    secret: &str,
    expiry_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = UserClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        exp: (now + chrono::Duration::hours(expiry_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry, returning its claims
pub fn verify_token(token: &str, secret: &str) -> Result<UserClaims, jsonwebtoken::errors::Error> {
    let token_data = jsonwebtoken::decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Middleware that extracts and verifies the bearer token from the
/// Authorization header before a protected route runs
pub async fn token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized(ErrorCode::TokenMissing))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(ErrorCode::TokenMalformed))?;

    let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("Token validation failed: {e}");
        unauthorized(ErrorCode::TokenInvalid)
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

fn unauthorized(code: ErrorCode) -> Response {
    AppError::new(code).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret-for-token-tests";

    #[test]
    fn token_roundtrip() {
        let token = create_token("user-1", "ana", "ana@example.com", SECRET, 8)
            .expect("failed to create token");

        let claims = verify_token(&token, SECRET).expect("failed to verify token");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.email, "ana@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative lifetime puts exp well past the default leeway
        let token = create_token("user-1", "ana", "ana@example.com", SECRET, -2)
            .expect("failed to create token");

        let err = verify_token(&token, SECRET).expect_err("expired token accepted");
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("user-1", "ana", "ana@example.com", SECRET, 8)
            .expect("failed to create token");

        assert!(verify_token(&token, "another-secret").is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
    }
}
