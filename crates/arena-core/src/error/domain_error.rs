//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(Snowflake),

    #[error("Skill group not found: {0}")]
    SkillGroupNotFound(Snowflake),

    #[error("Skill not found: {0}")]
    SkillNotFound(Snowflake),

    #[error("Video game not found: {0}")]
    VideoGameNotFound(Snowflake),

    #[error("Tournament not found: {0}")]
    TournamentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown skill group: {0}")]
    UnknownSkillGroup(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this resource")]
    NotResourceOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::SkillGroupNotFound(_) => "UNKNOWN_SKILL_GROUP",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::VideoGameNotFound(_) => "UNKNOWN_VIDEO_GAME",
            Self::TournamentNotFound(_) => "UNKNOWN_TOURNAMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownSkillGroup(_) => "UNKNOWN_SKILL_GROUP_REFERENCE",

            // Authorization
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::SkillGroupNotFound(_)
                | Self::SkillNotFound(_)
                | Self::VideoGameNotFound(_)
                | Self::TournamentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::UnknownSkillGroup(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotResourceOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }
}
