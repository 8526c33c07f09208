//! User profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_profiles table
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileModel {
    pub user_id: i64,
    pub bio: String,
    pub updated_at: DateTime<Utc>,
}
