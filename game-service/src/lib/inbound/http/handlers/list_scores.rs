use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::leaderboard::models::ScoreEntry;
use crate::domain::leaderboard::ports::LeaderboardServicePort;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    limit: Option<usize>,
}

pub async fn list_scores(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<ApiSuccess<Vec<ScoreEntryData>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    state
        .leaderboard_service
        .top_scores(limit)
        .await
        .map_err(ApiError::from)
        .map(|entries| {
            let entry_data: Vec<ScoreEntryData> = entries.iter().map(|e| e.into()).collect();
            ApiSuccess::new(StatusCode::OK, entry_data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntryData {
    pub username: String,
    pub score: i64,
    pub date: DateTime<Utc>,
}

impl From<&ScoreEntry> for ScoreEntryData {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            username: entry.username.as_str().to_string(),
            score: entry.score.value(),
            date: entry.date,
        }
    }
}
