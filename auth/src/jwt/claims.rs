use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by every issued token.
///
/// The subject is the authenticated username; `iat`/`exp` bound the token's
/// lifetime. Nothing else is stored server-side, so these fields are the
/// whole identity a request presents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with an expiration window.
    ///
    /// # Arguments
    /// * `subject` - Username the token identifies
    /// * `valid_hours` - Hours until the token expires
    pub fn for_subject(subject: impl Into<String>, valid_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(valid_hours);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Get the subject (username) this claim set identifies.
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice", 24);

        assert_eq!(claims.subject(), "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_for_subject_owned_string() {
        let claims = Claims::for_subject(String::from("bob"), 1);
        assert_eq!(claims.sub, "bob");
    }
}
