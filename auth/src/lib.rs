//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the game backend:
//! - Password hashing (Argon2id)
//! - Bearer token generation and validation (JWT, HS256)
//! - Authentication coordination
//!
//! Tokens are stateless: the subject (a username) is bound into a signed
//! claim set, so no server-side session store exists and rotating the
//! signing secret invalidates every outstanding token.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.encode(&Claims::for_subject("alice", 24)).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.subject(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_subject("alice", 24);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token on later requests
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.subject(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
