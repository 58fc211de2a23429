use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UsernameError;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let user = state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    // New account is authenticated immediately: mint its first token
    let claims = auth::Claims::for_subject(user.username.as_str(), state.jwt_expiration_hours);
    let token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AuthResponseData {
            username: user.username.as_str().to_string(),
            token,
        },
    ))
}

/// HTTP request body for creating an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),
}

impl SignupRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseSignupRequestError> {
        let username = Username::new(self.username)?;
        Ok(RegisterUserCommand::new(username, self.password))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Response body shared by signup and login: the account name plus a
/// freshly minted bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub username: String,
    pub token: String,
}
