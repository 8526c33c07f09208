//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Current authenticated user
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub superuser: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Profile / Dashboard Responses
// ============================================================================

/// Profile bio
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub bio: String,
    pub updated_at: DateTime<Utc>,
}

/// Counts of resources owned by the current user
#[derive(Debug, Serialize)]
pub struct ResourceCounts {
    pub skill_groups: i64,
    pub skills: i64,
    pub video_games: i64,
    pub tournaments: i64,
}

/// Dashboard summary for the current user
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: CurrentUserResponse,
    pub bio: String,
    pub owned: ResourceCounts,
}

// ============================================================================
// Skill Group Responses
// ============================================================================

/// Skill group
#[derive(Debug, Serialize)]
pub struct SkillGroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// Skill group detail with its skills
#[derive(Debug, Serialize)]
pub struct SkillGroupDetailResponse {
    #[serde(flatten)]
    pub skill_group: SkillGroupResponse,
    pub skills: Vec<SkillResponse>,
}

// ============================================================================
// Skill Responses
// ============================================================================

/// Skill
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group_id: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Confirmation returned when a skill is deleted, naming the skill
#[derive(Debug, Serialize)]
pub struct SkillDeletedResponse {
    pub message: String,
}

impl SkillDeletedResponse {
    pub fn for_skill(name: &str) -> Self {
        Self {
            message: format!("Skill \"{name}\" has been deleted."),
        }
    }
}

// ============================================================================
// Video Game Responses
// ============================================================================

/// Video game
#[derive(Debug, Serialize)]
pub struct VideoGameResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skill_group_id: Option<String>,
}

// ============================================================================
// Tournament Responses
// ============================================================================

/// Tournament with its attendance sets
#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: String,
    pub going_users: Vec<String>,
    pub not_going_users: Vec<String>,
}

/// Attendance summary returned by the going / not-going endpoints
#[derive(Debug, Serialize)]
pub struct TournamentAttendanceResponse {
    pub tournament_id: String,
    pub going_users: Vec<String>,
    pub not_going_users: Vec<String>,
}

// ============================================================================
// Home / Health Responses
// ============================================================================

/// Landing page payload
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub name: String,
    pub version: String,
}

impl HomeResponse {
    pub fn current() -> Self {
        Self {
            name: "arena-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Basic health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
