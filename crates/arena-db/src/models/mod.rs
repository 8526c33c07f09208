//! Database models - SQLx-compatible structs for PostgreSQL tables

mod profile;
mod refresh_token;
mod rsvp;
mod skill;
mod skill_group;
mod tournament;
mod user;
mod video_game;

pub use profile::UserProfileModel;
pub use refresh_token::RefreshTokenModel;
pub use rsvp::RsvpRowModel;
pub use skill::SkillModel;
pub use skill_group::SkillGroupModel;
pub use tournament::TournamentModel;
pub use user::UserModel;
pub use video_game::VideoGameModel;
