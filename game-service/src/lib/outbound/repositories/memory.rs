use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::leaderboard::models::Score;
use crate::domain::leaderboard::models::ScoreEntry;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::leaderboard::errors::LeaderboardError;
use crate::leaderboard::ports::ScoreRepository;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// In-memory store owning the user and score collections for the process
/// lifetime.
///
/// Users live in a map keyed by username so the uniqueness check and the
/// insert happen under one write lock; scores are an insertion-ordered,
/// append-only list. Both collections vanish on shutdown.
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    scores: RwLock<Vec<ScoreEntry>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            scores: RwLock::new(Vec::new()),
        }
    }

    /// Populate the store with the demo players and their score history.
    ///
    /// All demo accounts use the password "password123".
    ///
    /// # Errors
    /// * `Unknown` - Password hashing failed
    pub async fn seed_demo_data(&self, hasher: &auth::PasswordHasher) -> Result<(), UserError> {
        let now = Utc::now();

        let demo_users = [
            ("DemoUser", Duration::days(5)),
            ("ProGamer", Duration::days(2)),
            ("SnakeKing", Duration::days(10)),
        ];

        {
            let mut users = self.users.write().await;
            for (name, age) in demo_users {
                let password_hash = hasher
                    .hash("password123")
                    .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;
                users.insert(
                    name.to_string(),
                    User {
                        username: Username::new(name.to_string())
                            .map_err(UserError::InvalidUsername)?,
                        password_hash,
                        created_at: now - age,
                    },
                );
            }
        }

        let demo_scores = [
            ("SnakeKing", 500, Duration::days(1)),
            ("ProGamer", 350, Duration::hours(5)),
            ("DemoUser", 200, Duration::days(2)),
            ("SnakeKing", 450, Duration::days(3)),
            ("ProGamer", 100, Duration::days(1)),
        ];

        let mut scores = self.scores.write().await;
        for (name, score, age) in demo_scores {
            scores.push(ScoreEntry {
                username: Username::new(name.to_string()).map_err(UserError::InvalidUsername)?,
                score: Score::new(score)
                    .map_err(|e| UserError::Unknown(format!("Invalid demo score: {}", e)))?,
                date: now - age,
            });
        }

        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        // Check-then-insert under one write lock: concurrent creates for
        // the same username admit exactly one.
        match users.entry(user.username.as_str().to_string()) {
            Entry::Occupied(_) => Err(UserError::UsernameTaken(
                user.username.as_str().to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }
}

#[async_trait]
impl ScoreRepository for InMemoryStore {
    async fn add(&self, entry: ScoreEntry) -> Result<ScoreEntry, LeaderboardError> {
        let mut scores = self.scores.write().await;
        scores.push(entry.clone());
        Ok(entry)
    }

    async fn top(&self, limit: usize) -> Result<Vec<ScoreEntry>, LeaderboardError> {
        let scores = self.scores.read().await;

        let mut snapshot: Vec<ScoreEntry> = scores.clone();
        // Stable sort: equal scores keep their insertion order
        snapshot.sort_by(|a, b| b.score.cmp(&a.score));
        snapshot.truncate(limit);

        Ok(snapshot)
    }
}
