//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let pid = std::process::id();
        Self {
            username: format!("testuser{pid}x{suffix}"),
            email: format!("test{pid}x{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub superuser: bool,
}

// ============================================================================
// Skill groups
// ============================================================================

/// Create skill group request
#[derive(Debug, Serialize)]
pub struct CreateSkillGroupRequest {
    pub name: String,
    pub description: String,
}

impl CreateSkillGroupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Skill Group {suffix}"),
            description: "A test skill group".to_string(),
        }
    }
}

/// Skill group response
#[derive(Debug, Deserialize)]
pub struct SkillGroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner_id: String,
}

// ============================================================================
// Skills
// ============================================================================

/// Create skill request
#[derive(Debug, Serialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_group: Option<String>,
}

impl CreateSkillRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Skill {suffix}"),
            description: "A test skill".to_string(),
            skill_group: None,
        }
    }

    pub fn in_group(group_id: &str) -> Self {
        Self {
            skill_group: Some(group_id.to_string()),
            ..Self::unique()
        }
    }
}

/// Skill response
#[derive(Debug, Deserialize)]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    pub skill_group_id: Option<String>,
    pub created_by: String,
}

/// Skill deletion confirmation
#[derive(Debug, Deserialize)]
pub struct SkillDeletedResponse {
    pub message: String,
}

// ============================================================================
// Video games
// ============================================================================

/// Create video game request
#[derive(Debug, Serialize)]
pub struct CreateVideoGameRequest {
    pub title: String,
    pub description: String,
    pub release_date: String,
}

impl CreateVideoGameRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Game {suffix}"),
            description: "A test game".to_string(),
            release_date: "2020-01-15".to_string(),
        }
    }
}

/// Assign skill group request
#[derive(Debug, Serialize)]
pub struct AssignSkillGroupRequest {
    pub skill_group: Option<String>,
}

/// Video game response
#[derive(Debug, Deserialize)]
pub struct VideoGameResponse {
    pub id: String,
    pub title: String,
    pub created_by: String,
    pub required_skill_group_id: Option<String>,
}

// ============================================================================
// Tournaments
// ============================================================================

/// Create tournament request
#[derive(Debug, Serialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: String,
    pub date: String,
}

impl CreateTournamentRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Tournament {suffix}"),
            description: "A test tournament".to_string(),
            date: "2025-06-01".to_string(),
        }
    }
}

/// Tournament response with attendance sets
#[derive(Debug, Deserialize)]
pub struct TournamentResponse {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub going_users: Vec<String>,
    pub not_going_users: Vec<String>,
}

/// Attendance summary returned by the going / not-going endpoints
#[derive(Debug, Deserialize)]
pub struct TournamentAttendanceResponse {
    pub tournament_id: String,
    pub going_users: Vec<String>,
    pub not_going_users: Vec<String>,
}

// ============================================================================
// Account
// ============================================================================

/// Update profile request
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub bio: String,
}

/// Dashboard response
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
    pub bio: String,
    pub owned: ResourceCounts,
}

/// Owned-resource counts
#[derive(Debug, Deserialize)]
pub struct ResourceCounts {
    pub skill_groups: i64,
    pub skills: i64,
    pub video_games: i64,
    pub tournaments: i64,
}
