//! Domain entities

mod profile;
mod skill;
mod skill_group;
mod tournament;
mod user;
mod video_game;

pub use profile::UserProfile;
pub use skill::Skill;
pub use skill_group::SkillGroup;
pub use tournament::Tournament;
pub use user::User;
pub use video_game::VideoGame;
