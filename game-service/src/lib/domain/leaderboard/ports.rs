use async_trait::async_trait;

use crate::domain::leaderboard::models::Score;
use crate::domain::leaderboard::models::ScoreEntry;
use crate::domain::user::models::Username;
use crate::leaderboard::errors::LeaderboardError;

/// Port for leaderboard domain service operations.
#[async_trait]
pub trait LeaderboardServicePort: Send + Sync + 'static {
    /// Record a score for an authenticated player.
    ///
    /// # Arguments
    /// * `username` - Identity taken from the verified bearer token
    /// * `score` - Validated score value
    ///
    /// # Returns
    /// The created score entry
    ///
    /// # Errors
    /// * `UserNotFound` - No registered account for this username
    async fn submit_score(
        &self,
        username: Username,
        score: Score,
    ) -> Result<ScoreEntry, LeaderboardError>;

    /// Retrieve the highest scores, best first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// Up to `limit` entries sorted by score descending; ties keep
    /// submission order
    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError>;
}

/// Storage operations for the score collection.
#[async_trait]
pub trait ScoreRepository: Send + Sync + 'static {
    /// Append a score entry unconditionally.
    async fn add(&self, entry: ScoreEntry) -> Result<ScoreEntry, LeaderboardError>;

    /// Snapshot the top `limit` entries, sorted by score descending with
    /// ties in insertion order.
    async fn top(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError>;
}
