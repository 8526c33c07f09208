//! Tournament entity - an event users can RSVP to

use chrono::{DateTime, NaiveDate, Utc};

use crate::access::Owned;
use crate::value_objects::Snowflake;

/// A scheduled event. Attendance responses live in their own relation
/// (one row per responding user), keyed by [`crate::RsvpStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new Tournament
    pub fn new(
        id: Snowflake,
        name: String,
        description: String,
        date: NaiveDate,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            date,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Owned for Tournament {
    fn owner_id(&self) -> Snowflake {
        self.created_by
    }
}
