//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod error;
pub mod skill;
pub mod skill_group;
pub mod tournament;
pub mod user;
pub mod video_game;

// Re-export all services for convenience
pub use access::AccessService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use skill::SkillService;
pub use skill_group::SkillGroupService;
pub use tournament::TournamentService;
pub use user::UserService;
pub use video_game::VideoGameService;
