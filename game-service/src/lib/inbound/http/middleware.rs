use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified token subject into handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: Username,
}

/// Middleware that validates bearer tokens and adds the subject to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Check signature, structure, and expiry
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let username = Username::new(claims.subject().to_string()).map_err(|e| {
        tracing::warn!("Token subject is not a valid username: {}", e);
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { username });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
