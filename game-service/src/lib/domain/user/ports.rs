use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with hashed credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `Unknown` - Password hashing or storage failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Storage operations for the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// The uniqueness check and the insert are a single atomic unit:
    /// concurrent creates for the same username admit exactly one.
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username, exact match.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
