//! Error handling utilities for repositories

use arena_core::error::DomainError;
use arena_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "profile not found" error
pub fn profile_not_found(user_id: Snowflake) -> DomainError {
    DomainError::ProfileNotFound(user_id)
}

/// Create a "skill group not found" error
pub fn skill_group_not_found(id: Snowflake) -> DomainError {
    DomainError::SkillGroupNotFound(id)
}

/// Create a "skill not found" error
pub fn skill_not_found(id: Snowflake) -> DomainError {
    DomainError::SkillNotFound(id)
}

/// Create a "video game not found" error
pub fn video_game_not_found(id: Snowflake) -> DomainError {
    DomainError::VideoGameNotFound(id)
}

/// Create a "tournament not found" error
pub fn tournament_not_found(id: Snowflake) -> DomainError {
    DomainError::TournamentNotFound(id)
}
