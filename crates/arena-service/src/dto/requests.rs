//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the ones carrying user input
//! implement `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update profile bio request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: String,
}

// ============================================================================
// Skill Group Requests
// ============================================================================

/// Create skill group request.
///
/// The non-empty name rule is the one hard validation requirement of the
/// resource layer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Update skill group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkillGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required."))]
    pub name: Option<String>,

    pub description: Option<String>,
}

// ============================================================================
// Skill Requests
// ============================================================================

/// Create skill request.
///
/// `skill_group` may name any existing group (Snowflake ID as string);
/// joining a group carries no ownership restriction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub skill_group: Option<String>,
}

/// Update skill request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    /// New group (Snowflake ID as string), `Some(None)` clears the group
    #[serde(default, with = "serde_double_option")]
    pub skill_group: Option<Option<String>>,
}

// ============================================================================
// Video Game Requests
// ============================================================================

/// Create video game request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoGameRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// ISO-8601 date (YYYY-MM-DD)
    pub release_date: chrono::NaiveDate,
}

/// Update video game request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVideoGameRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub release_date: Option<chrono::NaiveDate>,
}

/// Assign (or clear) the skill group a game requires
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AssignSkillGroupRequest {
    /// Skill group ID as string, or null to clear the requirement
    pub skill_group: Option<String>,
}

// ============================================================================
// Tournament Requests
// ============================================================================

/// Create tournament request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// ISO-8601 date (YYYY-MM-DD)
    pub date: chrono::NaiveDate,
}

/// Update tournament request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub date: Option<chrono::NaiveDate>,
}

/// Distinguishes an absent field from an explicit null
mod serde_double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
