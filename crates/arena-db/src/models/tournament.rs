//! Tournament database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for tournaments table
#[derive(Debug, Clone, FromRow)]
pub struct TournamentModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
