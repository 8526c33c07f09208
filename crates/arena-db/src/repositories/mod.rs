//! PostgreSQL repository implementations

mod error;
mod profile;
mod refresh_token;
mod skill;
mod skill_group;
mod tournament;
mod user;
mod video_game;

pub use profile::PgProfileRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use skill::PgSkillRepository;
pub use skill_group::PgSkillGroupRepository;
pub use tournament::PgTournamentRepository;
pub use user::PgUserRepository;
pub use video_game::PgVideoGameRepository;
