use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::Username;
use crate::leaderboard::errors::ScoreError;

/// One recorded game result.
///
/// Entries are append-only history: a player may appear any number of
/// times, and nothing is ever mutated or deleted. The username references
/// a registered account by name.
#[derive(Debug, Clone)]
pub struct ScoreEntry {
    pub username: Username,
    pub score: Score,
    pub date: DateTime<Utc>,
}

/// Score value type
///
/// A non-negative integer as reported by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(i64);

impl Score {
    /// Create a new valid score.
    ///
    /// # Errors
    /// * `Negative` - Score is below zero
    pub fn new(score: i64) -> Result<Self, ScoreError> {
        if score < 0 {
            Err(ScoreError::Negative { actual: score })
        } else {
            Ok(Self(score))
        }
    }

    /// Get the score as a plain integer.
    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_valid() {
        assert_eq!(Score::new(500).unwrap().value(), 500);
    }

    #[test]
    fn test_score_zero_is_valid() {
        assert_eq!(Score::new(0).unwrap().value(), 0);
    }

    #[test]
    fn test_score_negative_rejected() {
        let result = Score::new(-1);
        assert!(matches!(result, Err(ScoreError::Negative { actual: -1 })));
    }
}
