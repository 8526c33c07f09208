//! # arena-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service API surface for handler crates
pub use dto::{
    AssignSkillGroupRequest, AuthResponse, CreateSkillGroupRequest, CreateSkillRequest,
    CreateTournamentRequest, CreateVideoGameRequest, CurrentUserResponse, DashboardResponse,
    HealthResponse, HomeResponse, LoginRequest, LogoutRequest, ProfileResponse,
    ReadinessResponse, RefreshTokenRequest, RegisterRequest, ResourceCounts,
    SkillDeletedResponse, SkillGroupDetailResponse, SkillGroupResponse, SkillResponse,
    TournamentAttendanceResponse, TournamentResponse, UpdateProfileRequest,
    UpdateSkillGroupRequest, UpdateSkillRequest, UpdateTournamentRequest, UpdateVideoGameRequest,
    VideoGameResponse,
};
pub use services::{
    AccessService, AuthService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SkillGroupService, SkillService, TournamentService, UserService,
    VideoGameService,
};
