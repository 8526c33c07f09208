//! Skill group entity <-> model mapper

use arena_core::entities::SkillGroup;
use arena_core::value_objects::Snowflake;

use crate::models::SkillGroupModel;

impl From<SkillGroupModel> for SkillGroup {
    fn from(model: SkillGroupModel) -> Self {
        SkillGroup {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            owner_id: Snowflake::new(model.owner_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
