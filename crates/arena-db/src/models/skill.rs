//! Skill database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub skill_group_id: Option<i64>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
