//! User entity - a registered community member

use chrono::{DateTime, Utc};

use crate::access::Actor;
use crate::value_objects::Snowflake;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The identity this user acts as in access checks
    #[inline]
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            superuser: self.superuser,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{can_modify, Owned};

    struct Thing(Snowflake);
    impl Owned for Thing {
        fn owner_id(&self) -> Snowflake {
            self.0
        }
    }

    #[test]
    fn test_actor_carries_superuser_flag() {
        let mut user = User::new(
            Snowflake::new(1),
            "admin".to_string(),
            "admin@example.com".to_string(),
        );
        assert!(!user.actor().superuser);

        user.superuser = true;
        let thing = Thing(Snowflake::new(99));
        assert!(can_modify(&user.actor(), &thing));
    }
}
