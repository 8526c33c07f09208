//! Skill entity - a named capability, optionally grouped

use chrono::{DateTime, Utc};

use crate::access::Owned;
use crate::value_objects::Snowflake;

/// A skill attributed to its creator, optionally belonging to a skill group.
///
/// Any existing group may be joined; group membership carries no ownership
/// restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub skill_group_id: Option<Snowflake>,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    /// Create a new Skill
    pub fn new(
        id: Snowflake,
        name: String,
        description: String,
        skill_group_id: Option<Snowflake>,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            skill_group_id,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the skill into a group (or out of any group)
    pub fn set_group(&mut self, skill_group_id: Option<Snowflake>) {
        self.skill_group_id = skill_group_id;
        self.updated_at = Utc::now();
    }
}

impl Owned for Skill {
    fn owner_id(&self) -> Snowflake {
        self.created_by
    }
}
