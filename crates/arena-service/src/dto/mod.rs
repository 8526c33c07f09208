//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AssignSkillGroupRequest, CreateSkillGroupRequest, CreateSkillRequest, CreateTournamentRequest,
    CreateVideoGameRequest, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
    UpdateProfileRequest, UpdateSkillGroupRequest, UpdateSkillRequest, UpdateTournamentRequest,
    UpdateVideoGameRequest,
};

// Re-export mapper helper structs
pub use mappers::TournamentWithAttendance;

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CurrentUserResponse, DashboardResponse, HealthResponse, HomeResponse,
    ProfileResponse, ReadinessResponse, ResourceCounts, SkillDeletedResponse,
    SkillGroupDetailResponse, SkillGroupResponse, SkillResponse, TournamentAttendanceResponse,
    TournamentResponse, VideoGameResponse,
};
