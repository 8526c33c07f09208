//! Tournament entity <-> model mapper

use arena_core::entities::Tournament;
use arena_core::value_objects::Snowflake;

use crate::models::TournamentModel;

impl From<TournamentModel> for Tournament {
    fn from(model: TournamentModel) -> Self {
        Tournament {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            date: model.date,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
