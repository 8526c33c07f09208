//! Tournament RSVP database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tournament_rsvps table.
///
/// At most one row per (tournament, user); `status` is the database string
/// form of [`arena_core::RsvpStatus`].
#[derive(Debug, Clone, FromRow)]
pub struct RsvpRowModel {
    pub tournament_id: i64,
    pub user_id: i64,
    pub status: String,
    pub responded_at: DateTime<Utc>,
}
