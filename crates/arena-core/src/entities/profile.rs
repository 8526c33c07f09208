//! User profile entity - one-to-one extension of a user account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Profile attached to a user account. Exactly one per user; created at
/// registration and removed with the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: Snowflake,
    pub bio: String,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile for a freshly registered user
    pub fn empty(user_id: Snowflake) -> Self {
        Self {
            user_id,
            bio: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Replace the bio text
    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }
}
