//! Skill group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for skill_groups table
#[derive(Debug, Clone, FromRow)]
pub struct SkillGroupModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
