use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Hash password using auth library; plaintext is never stored or logged
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        // The repository insert is the uniqueness check; a duplicate
        // registration is rejected without touching the stored user.
        self.repository.create(user).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFound(username.to_string()))
    }
}
