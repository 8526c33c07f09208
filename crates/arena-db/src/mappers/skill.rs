//! Skill entity <-> model mapper

use arena_core::entities::Skill;
use arena_core::value_objects::Snowflake;

use crate::models::SkillModel;

impl From<SkillModel> for Skill {
    fn from(model: SkillModel) -> Self {
        Skill {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            skill_group_id: model.skill_group_id.map(Snowflake::new),
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
