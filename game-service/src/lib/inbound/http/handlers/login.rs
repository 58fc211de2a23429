use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::signup::AuthResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let username = Username::new(body.username)
        .map_err(|e| ApiError::UnprocessableEntity(format!("Invalid username: {}", e)))?;

    // Unknown account is reported as such; only a wrong password is 401
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)?;

    let claims = auth::Claims::for_subject(user.username.as_str(), state.jwt_expiration_hours);

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            username: user.username.as_str().to_string(),
            token: result.access_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}
