//! User profile entity <-> model mapper

use arena_core::entities::UserProfile;
use arena_core::value_objects::Snowflake;

use crate::models::UserProfileModel;

impl From<UserProfileModel> for UserProfile {
    fn from(model: UserProfileModel) -> Self {
        UserProfile {
            user_id: Snowflake::new(model.user_id),
            bio: model.bio,
            updated_at: model.updated_at,
        }
    }
}
