//! Skill group entity - a named collection of skills

use chrono::{DateTime, Utc};

use crate::access::Owned;
use crate::value_objects::Snowflake;

/// A named collection of skills, owned by a user.
///
/// Deleting a skill group removes its skills; video games that required it
/// merely lose the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub owner_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SkillGroup {
    /// Create a new SkillGroup
    pub fn new(id: Snowflake, name: String, description: String, owner_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

impl Owned for SkillGroup {
    fn owner_id(&self) -> Snowflake {
        self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{can_modify, Actor};

    #[test]
    fn test_ownership() {
        let group = SkillGroup::new(
            Snowflake::new(1),
            "Aiming".to_string(),
            String::new(),
            Snowflake::new(100),
        );
        assert!(can_modify(&Actor::new(Snowflake::new(100)), &group));
        assert!(!can_modify(&Actor::new(Snowflake::new(200)), &group));
        assert!(can_modify(&Actor::superuser(Snowflake::new(200)), &group));
    }
}
