//! Video game database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for video_games table
#[derive(Debug, Clone, FromRow)]
pub struct VideoGameModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub created_by: i64,
    pub required_skill_group_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
