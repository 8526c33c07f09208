//! Video game entity <-> model mapper

use arena_core::entities::VideoGame;
use arena_core::value_objects::Snowflake;

use crate::models::VideoGameModel;

impl From<VideoGameModel> for VideoGame {
    fn from(model: VideoGameModel) -> Self {
        VideoGame {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            release_date: model.release_date,
            created_by: Snowflake::new(model.created_by),
            required_skill_group_id: model.required_skill_group_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
