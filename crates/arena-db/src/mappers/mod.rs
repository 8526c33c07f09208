//! Entity <-> model mappers

mod profile;
mod skill;
mod skill_group;
mod tournament;
mod user;
mod video_game;
