use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::leaderboard::models::Score;
use crate::domain::leaderboard::models::ScoreEntry;
use crate::domain::user::models::Username;
use crate::leaderboard::errors::LeaderboardError;
use crate::leaderboard::ports::LeaderboardServicePort;
use crate::leaderboard::ports::ScoreRepository;
use crate::user::ports::UserRepository;

/// Domain service implementation for leaderboard operations.
///
/// Depends on both the score and user collections: submissions re-check
/// that the token's subject still names a registered account.
pub struct LeaderboardService<SR, UR>
where
    SR: ScoreRepository,
    UR: UserRepository,
{
    scores: Arc<SR>,
    users: Arc<UR>,
}

impl<SR, UR> LeaderboardService<SR, UR>
where
    SR: ScoreRepository,
    UR: UserRepository,
{
    /// Create a new leaderboard service with injected repositories.
    pub fn new(scores: Arc<SR>, users: Arc<UR>) -> Self {
        Self { scores, users }
    }
}

#[async_trait]
impl<SR, UR> LeaderboardServicePort for LeaderboardService<SR, UR>
where
    SR: ScoreRepository,
    UR: UserRepository,
{
    async fn submit_score(
        &self,
        username: Username,
        score: Score,
    ) -> Result<ScoreEntry, LeaderboardError> {
        // A valid token for an unregistered username cannot arise while
        // accounts are never deleted, but the signed subject is still
        // checked against the store before anything is recorded.
        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(|e| LeaderboardError::Unknown(e.to_string()))?;

        if user.is_none() {
            return Err(LeaderboardError::UserNotFound(username.to_string()));
        }

        let entry = ScoreEntry {
            username,
            score,
            date: Utc::now(),
        };

        self.scores.add(entry).await
    }

    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        self.scores.top(limit).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::User;
    use crate::user::errors::UserError;

    mock! {
        pub TestScoreRepository {}

        #[async_trait]
        impl ScoreRepository for TestScoreRepository {
            async fn add(&self, entry: ScoreEntry) -> Result<ScoreEntry, LeaderboardError>;
            async fn top(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn registered_user(name: &str) -> User {
        User {
            username: Username::new(name.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_submit_score_success() {
        let mut scores = MockTestScoreRepository::new();
        let mut users = MockTestUserRepository::new();

        let user = registered_user("player1");
        users
            .expect_find_by_username()
            .withf(|u| u.as_str() == "player1")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        scores
            .expect_add()
            .withf(|entry| entry.username.as_str() == "player1" && entry.score.value() == 500)
            .times(1)
            .returning(|entry| Ok(entry));

        let service = LeaderboardService::new(Arc::new(scores), Arc::new(users));

        let result = service
            .submit_score(
                Username::new("player1".to_string()).unwrap(),
                Score::new(500).unwrap(),
            )
            .await;

        assert!(result.is_ok());
        let entry = result.unwrap();
        assert_eq!(entry.username.as_str(), "player1");
        assert_eq!(entry.score.value(), 500);
    }

    #[tokio::test]
    async fn test_submit_score_unknown_user() {
        let mut scores = MockTestScoreRepository::new();
        let mut users = MockTestUserRepository::new();

        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        // Nothing is recorded when the subject is not registered
        scores.expect_add().times(0);

        let service = LeaderboardService::new(Arc::new(scores), Arc::new(users));

        let result = service
            .submit_score(
                Username::new("ghost".to_string()).unwrap(),
                Score::new(100).unwrap(),
            )
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            LeaderboardError::UserNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_top_scores_delegates_limit() {
        let mut scores = MockTestScoreRepository::new();
        let users = MockTestUserRepository::new();

        scores
            .expect_top()
            .with(eq(3usize))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = LeaderboardService::new(Arc::new(scores), Arc::new(users));

        let result = service.top_scores(3).await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
