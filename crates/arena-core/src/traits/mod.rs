//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ProfileRepository, RefreshToken, RefreshTokenRepository, RepoResult, SkillGroupRepository,
    SkillRepository, TournamentRepository, UserRepository, VideoGameRepository,
};
