//! User entity <-> model mapper

use arena_core::entities::User;
use arena_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity (the password hash stays in the
/// database layer)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            superuser: model.is_superuser,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
