//! Video game entity - a catalog entry

use chrono::{DateTime, NaiveDate, Utc};

use crate::access::Owned;
use crate::value_objects::Snowflake;

/// A catalog entry, optionally requiring a skill group for participation.
///
/// The required group is a soft reference: when the group is deleted the
/// game survives with the requirement cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoGame {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub created_by: Snowflake,
    pub required_skill_group_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoGame {
    /// Create a new VideoGame
    pub fn new(
        id: Snowflake,
        title: String,
        description: String,
        release_date: NaiveDate,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            release_date,
            created_by,
            required_skill_group_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set or clear the required skill group
    pub fn set_required_skill_group(&mut self, skill_group_id: Option<Snowflake>) {
        self.required_skill_group_id = skill_group_id;
        self.updated_at = Utc::now();
    }
}

impl Owned for VideoGame {
    fn owner_id(&self) -> Snowflake {
        self.created_by
    }
}
