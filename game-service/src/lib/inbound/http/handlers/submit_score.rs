use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::list_scores::ScoreEntryData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::leaderboard::models::Score;
use crate::domain::leaderboard::ports::LeaderboardServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn submit_score(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<SubmitScoreRequest>,
) -> Result<ApiSuccess<ScoreEntryData>, ApiError> {
    let score =
        Score::new(body.score).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .leaderboard_service
        .submit_score(auth_user.username, score)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::CREATED, entry.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitScoreRequest {
    score: i64,
}
