use thiserror::Error;

/// Error for Score validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Score must be a non-negative integer, got {actual}")]
    Negative { actual: i64 },
}

/// Top-level error for all leaderboard operations
#[derive(Debug, Clone, Error)]
pub enum LeaderboardError {
    #[error("Invalid score: {0}")]
    InvalidScore(#[from] ScoreError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // Infrastructure errors
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for LeaderboardError {
    fn from(err: anyhow::Error) -> Self {
        LeaderboardError::Unknown(err.to_string())
    }
}
